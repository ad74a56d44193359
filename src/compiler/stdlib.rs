//! The C runtime every generated file includes.
//!
//! Generated code only ever calls the built-ins the type checker knows
//! about, so the runtime is a fixed header plus its implementation.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::info;

pub const HEADER_NAME: &str = "minic.h";
pub const SOURCE_NAME: &str = "minic.c";

pub const STDLIB_HEADER: &str = r#"#ifndef MINIC_H
#define MINIC_H

#include <stdbool.h>

void print(char *format, ...);

#endif
"#;

pub const STDLIB_SOURCE: &str = r#"#include "minic.h"

#include <stdarg.h>
#include <stdio.h>

void print(char *format, ...)
{
  va_list args;
  va_start(args, format);
  vprintf(format, args);
  va_end(args);
}
"#;

/// Writes `minic.h` and `minic.c` into `directory`, returning their paths.
pub fn write_runtime(directory: &Path) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);

    for (name, contents) in [(HEADER_NAME, STDLIB_HEADER), (SOURCE_NAME, STDLIB_SOURCE)] {
        let path = directory.join(name);
        fs::write(&path, contents)?;
        info!(path = %path.display(), "wrote runtime file");
        written.push(path);
    }

    Ok(written)
}
