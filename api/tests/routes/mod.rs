mod health_test;
mod metrics;
mod middleware_test;
mod projects;
