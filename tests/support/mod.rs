#![allow(dead_code)]

pub mod dialog;
pub mod env;
