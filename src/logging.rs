// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 计算核心只发事件, 订阅器由宿主进程决定
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (CLI/宿主进程调用)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=wheel_balancing_dss=trace
///
/// # 示例
/// ```no_run
/// use wheel_balancing_dss::logging;
/// logging::init();
/// ```
pub fn init() {
    // 从环境变量读取日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 紧凑单行格式
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
