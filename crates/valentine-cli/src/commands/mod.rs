pub mod config;
pub mod countdown;
pub mod play;
pub mod preview;

use std::sync::Arc;

use valentine_core::{AssetProvider, Config, DirAssets, NoAssets, NotificationSink, SilentSink};

use crate::bell::TerminalBell;

pub(crate) fn assets_for(config: &Config) -> Box<dyn AssetProvider> {
    match &config.assets.dir {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(NoAssets),
    }
}

pub(crate) fn sink_for(config: &Config) -> Arc<dyn NotificationSink> {
    if config.notifications.enabled {
        Arc::new(TerminalBell)
    } else {
        Arc::new(SilentSink)
    }
}
