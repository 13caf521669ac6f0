// SPDX-License-Identifier: MIT OR Apache-2.0

use modeops_contact_client::ContactConfig;

// This is read at compile time, please rebuild if you change this value.
const LOG_LEVEL: Option<&str> = std::option_env!("MODEOPS_LOG_LEVEL");

pub const BRAND: &str = "ModeOps";

pub fn log_level() -> log::Level {
    parse_log_level(LOG_LEVEL)
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

pub fn contact_config() -> ContactConfig {
    ContactConfig::from_build_env()
}
