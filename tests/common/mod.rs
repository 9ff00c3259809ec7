#![allow(dead_code)] // Each integration test binary uses a subset of the fixture API
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

pub mod fixture;
