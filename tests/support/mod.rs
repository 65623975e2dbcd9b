#![allow(dead_code)]

pub mod fake_service;
pub mod pulsepoint_env;
pub mod stub_server;
