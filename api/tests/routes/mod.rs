mod auth;
mod health_test;
