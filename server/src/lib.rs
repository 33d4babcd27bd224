pub mod catalog;
pub mod config;
pub mod contact;
pub mod display;
pub mod environment;
pub mod errors;
pub mod library;
pub mod normalization;
pub mod pages;
pub mod routes;
pub mod scheduling;
pub mod urls;
