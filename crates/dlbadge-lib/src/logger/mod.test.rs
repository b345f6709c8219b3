use super::*;

#[test]
fn test_filter_directives_scope_level_to_this_tool() {
    let directives = filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("dlbadge=debug,dlbadge_lib=debug,"));
    assert!(directives.contains("reqwest=warn"));
    assert!(EnvFilter::try_new(&directives).is_ok());
}

#[test]
fn test_init_once() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test binary thread may have installed a subscriber first
    match Logger::init(config.clone()) {
        Ok(logger) => assert_eq!(logger.level(), LogLevel::Error),
        Err(err) => assert!(matches!(
            err,
            LoggerError::AlreadyInitialized | LoggerError::InitializationFailed { .. }
        )),
    }

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. })
    ));
}
