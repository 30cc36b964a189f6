//! Purges a wiki page's URL from the Cloudflare cache whenever the page is
//! saved or deleted.
//!
//! The host platform turns its page events into calls to
//! [`hooks::on_page_save_complete`] and [`hooks::on_page_delete_complete`];
//! those hand the page's canonical URL to a [`providers::CachePurger`], which
//! for Cloudflare is [`providers::cloudflare::Cloudflare`].

pub mod hooks;
pub mod providers;
pub mod settings;
