mod application;
mod auth;
mod notification;
