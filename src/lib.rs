//! Storefront page orchestration: brand lookup, locale resolution, redirect
//! policy and dictionary loading for the cart and home pages.

pub mod banner;
pub mod brand;
pub mod config;
pub mod cookies;
pub mod graphql;
pub mod i18n;
pub mod metrics;
pub mod pages;
pub mod redirect;
pub mod request;
pub mod server;
