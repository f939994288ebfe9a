mod auth;
mod health;
mod ingredients;
mod items;
mod menus;
