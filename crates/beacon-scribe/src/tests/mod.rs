mod notice;
mod providers;
