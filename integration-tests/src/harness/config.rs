use gstscope_core::conf::GstscopeConfig;

/// Point the listener at a test-allocated port on localhost.
pub fn patch_listen(mut cfg: GstscopeConfig, port: u16) -> GstscopeConfig {
    cfg.server.listen = format!("127.0.0.1:{port}");
    // Tests never leave pid files behind.
    cfg.server.pid_file = None;
    cfg
}
