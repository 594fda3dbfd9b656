mod common;





#[cfg(not(loom))]
mod config;

#[cfg(loom)]
mod loom_test;
