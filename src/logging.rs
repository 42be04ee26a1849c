//! 日志初始化
//!
//! 由嵌入方（Web 层、后台任务等）在进程启动时调用一次。
//! 返回的 guard 必须在进程存活期间持有，否则非阻塞写入线程会提前退出。

use crate::config::AppConfig;

pub fn init_tracing(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}
