use std::env;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "fundraiser";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            mongodb_uri: env_or("MONGODB_URI", DEFAULT_MONGODB_URI),
            database_name: env_or("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
