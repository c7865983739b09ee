/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! C source rendering of a packed image.

use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt;

use crate::{
    descriptor::{IMAGE_HEADER_MAGIC, ImageDescriptor, ImageHeader},
    error::{Error, Result},
    grid::PixelGrid,
    planes::PackedPlanes,
};

const INCLUDE_PREAMBLE: &str = r#"
#ifdef __has_include
    #if __has_include("lvgl.h")
        #ifndef LV_LVGL_H_INCLUDE_SIMPLE
            #define LV_LVGL_H_INCLUDE_SIMPLE
        #endif
    #endif
#endif

#if defined(LV_LVGL_H_INCLUDE_SIMPLE)
    #include "lvgl.h"
#else
    #include "lvgl/lvgl.h"
#endif


#ifndef LV_ATTRIBUTE_MEM_ALIGN
#define LV_ATTRIBUTE_MEM_ALIGN
#endif
"#;

pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One converted image: its symbol name, packed planes and descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    name: String,
    planes: PackedPlanes,
    descriptor: ImageDescriptor,
}

impl ImageArtifact {
    pub fn new(name: impl Into<String>, grid: &PixelGrid) -> Result<Self> {
        let name = name.into();
        if !is_c_identifier(&name) {
            return Err(Error::InvalidName(name));
        }

        let planes = PackedPlanes::from_grid(grid);
        let descriptor = ImageDescriptor::new(format!("{name}_map"), &planes)?;

        Ok(Self {
            name,
            planes,
            descriptor,
        })
    }

    pub fn descriptor(&self) -> &ImageDescriptor {
        &self.descriptor
    }

    pub fn file_name(&self) -> String {
        format!("{}.c", self.name)
    }

    /// Full C source for this image. Rendered in one piece so callers never
    /// write a partial file.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_map(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attribute = format!("LV_ATTRIBUTE_{}", self.name.to_ascii_uppercase());

        writeln!(f, "#ifndef {attribute}")?;
        writeln!(f, "#define {attribute}")?;
        writeln!(f, "#endif")?;
        writeln!(f)?;
        writeln!(f, "static const")?;
        writeln!(f, "LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST {attribute}")?;
        writeln!(f, "uint8_t {}[] = {{", self.descriptor.data)?;
        writeln!(f)?;

        // one image row per line, color rows first
        for row in self.planes.color_rows().chain(self.planes.alpha_rows()) {
            write_hex_row(f, row)?;
        }

        writeln!(f)?;
        writeln!(f, "}};")
    }

    fn write_descriptor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ImageDescriptor {
            header,
            data_size,
            data,
            reserved,
        } = &self.descriptor;
        let ImageHeader {
            magic,
            cf,
            flags,
            w,
            h,
            stride,
            reserved_2,
        } = header;

        writeln!(f, "const lv_image_dsc_t {} = {{", self.name)?;
        if *magic == IMAGE_HEADER_MAGIC {
            writeln!(f, "  .header.magic = LV_IMAGE_HEADER_MAGIC,")?;
        } else {
            writeln!(f, "  .header.magic = {magic:#04x},")?;
        }
        writeln!(f, "  .header.cf = {},", cf.c_name())?;
        writeln!(f, "  .header.flags = {flags},")?;
        writeln!(f, "  .header.w = {w},")?;
        writeln!(f, "  .header.h = {h},")?;
        writeln!(f, "  .header.stride = {stride},")?;
        writeln!(f, "  .header.reserved_2 = {reserved_2},")?;
        writeln!(f, "  .data_size = {data_size},")?;
        writeln!(f, "  .data = {data},")?;
        writeln!(f, "  .reserved = {},", reserved.as_deref().unwrap_or("NULL"))?;
        writeln!(f, "}};")
    }
}

fn write_hex_row(f: &mut fmt::Formatter<'_>, row: &[u8]) -> fmt::Result {
    f.write_str("    ")?;
    for (i, byte) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{byte:#04x}")?;
    }
    f.write_str(",\n")
}

impl fmt::Display for ImageArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INCLUDE_PREAMBLE)?;
        writeln!(f)?;
        self.write_map(f)?;
        writeln!(f)?;
        self.write_descriptor(f)?;
        writeln!(f)
    }
}
