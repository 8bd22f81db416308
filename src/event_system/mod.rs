pub mod event_listeners;
pub mod event_system_plugin;
pub mod events;
