/*
 * Responsibility
 * - crate の公開モジュール
 * - binary (main.rs) と integration tests (tests/) の両方から参照される
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
pub mod validation;
