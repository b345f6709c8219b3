use super::*;

fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    let mut config = EnvironmentConfig::default();
    for (key, value) in pairs {
        let value = Some(value.to_string());
        match *key {
            "NO_COLOR" => config.no_color = value,
            "FORCE_COLOR" => config.force_color = value,
            "CLICOLOR" => config.clicolor = value,
            "CI" => config.ci = value,
            other => panic!("unexpected variable {other}"),
        }
    }
    config
}

#[test]
fn test_no_color_disables() {
    let color = env(&[("NO_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let color = env(&[("NO_COLOR", "")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let color = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")])
        .apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Always);
}

#[test]
fn test_ci_disables_color() {
    let color = env(&[("CI", "true"), ("FORCE_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);
}

#[test]
fn test_explicit_intent_is_kept() {
    let config = env(&[("NO_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_resolve_ansi_explicit() {
    assert!(resolve_ansi(ColorIntent::Always, LogOutput::Stderr));
    assert!(!resolve_ansi(ColorIntent::Never, LogOutput::Stdout));
}
