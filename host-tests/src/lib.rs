//! Host-based tests for the TFT setup report
//! These tests run on the development machine, not on the ESP32
