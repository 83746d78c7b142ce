// Resource services: one inherent method per backend endpoint.

mod actuators;
mod catalog;
mod devices;
mod readings;
mod rooms;
mod sensors;
mod weather;
