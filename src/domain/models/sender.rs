use std::fmt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => return write!(f, "{}", Config::get(ConfigKey::Username)),
            Sender::Bot => return write!(f, "OpsInsight"),
        }
    }
}
