mod calibration;
mod common;
mod devices;
mod persistence;
mod rooms;
