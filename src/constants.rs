// Centralized defaults & emitted identifiers
use std::num::NonZeroUsize;

pub const DEFAULT_INPUT: &str = "modelo_esp32.tflite";
pub const DEFAULT_OUTPUT: &str = "modelo_esp32.h";
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(12).unwrap();

pub const GUARD_MACRO: &str = "MODELO_ESP32_H";
pub const ARRAY_IDENT: &str = "modelo_esp32";
pub const LEN_IDENT: &str = "modelo_esp32_len";

pub const ROW_INDENT: &str = "    ";
