//! Deterministic rendering of a validated schema document to canonical
//! .proto text, and the single persistence boundary (render, then
//! overwrite a file path).

use protogen_schema::node::{Enum, Message, ProtoSpec, Service};
use std::{
    fmt::{self, Write},
    fs,
    path::Path,
};
use thiserror::Error as ThisError;

///
/// RenderError
///

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("proto rendering failed: {0}")]
    Serialize(#[from] fmt::Error),

    #[error("failed to write proto file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a document to canonical .proto text.
///
/// Pure: the same document always yields byte-identical output. Fails
/// as a whole or not at all; no partial text is ever returned.
pub fn render(spec: &ProtoSpec) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "syntax = \"{}\";", spec.syntax())?;
    writeln!(out)?;

    let mut sections: Vec<String> = Vec::new();

    if let Some(package) = spec.package() {
        sections.push(format!("package {package};\n"));
    }

    let imports = spec.imports();
    if !imports.is_empty() {
        let mut section = String::new();
        for import in &imports {
            if import.is_public() {
                writeln!(section, "import public \"{}\";", import.path())?;
            } else {
                writeln!(section, "import \"{}\";", import.path())?;
            }
        }
        sections.push(section);
    }

    if let Some(comment) = spec.comment() {
        let mut section = String::new();
        for line in comment.lines() {
            writeln!(section, "// {line}")?;
        }
        sections.push(section);
    }

    for message in spec.messages() {
        sections.push(message_block(&message, 0)?);
    }
    for enumeration in spec.enums() {
        sections.push(enum_block(&enumeration)?);
    }
    for service in spec.services() {
        sections.push(service_block(&service)?);
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(section);
    }

    Ok(out)
}

/// Render the document and overwrite the given path with the result.
pub fn persist(spec: &ProtoSpec, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let text = render(spec)?;
    fs::write(path, text)?;

    Ok(())
}

fn message_block(message: &Message, depth: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let indent = "  ".repeat(depth);

    match message.comment() {
        Some(comment) => {
            writeln!(out, "{indent}message {} {{ // {comment}", message.simple_name())?;
        }
        None => writeln!(out, "{indent}message {} {{", message.simple_name())?,
    }

    let fields = message.fields();
    for field in &fields {
        let repeated = if field.is_repeated() { "repeated " } else { "" };
        match field.comment() {
            Some(comment) => writeln!(
                out,
                "{indent}  {repeated}{} {} = {}; // {comment}",
                field.ty(),
                field.name(),
                field.number(),
            )?,
            None => writeln!(
                out,
                "{indent}  {repeated}{} {} = {};",
                field.ty(),
                field.name(),
                field.number(),
            )?,
        }
    }

    let mut body_written = !fields.is_empty();
    for nested in message.nested_messages() {
        if body_written {
            out.push('\n');
        }
        out.push_str(&message_block(&nested, depth + 1)?);
        body_written = true;
    }

    writeln!(out, "{indent}}}")?;
    Ok(out)
}

fn enum_block(enumeration: &Enum) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match enumeration.comment() {
        Some(comment) => writeln!(out, "enum {} {{ // {comment}", enumeration.name())?,
        None => writeln!(out, "enum {} {{", enumeration.name())?,
    }

    for value in enumeration.values() {
        match value.comment() {
            Some(comment) => {
                writeln!(out, "  {} = {}; // {comment}", value.name(), value.value())?;
            }
            None => writeln!(out, "  {} = {};", value.name(), value.value())?,
        }
    }

    writeln!(out, "}}")?;
    Ok(out)
}

fn service_block(service: &Service) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match service.comment() {
        Some(comment) => writeln!(out, "service {} {{ // {comment}", service.name())?,
        None => writeln!(out, "service {} {{", service.name())?,
    }

    for rpc in service.rpcs() {
        let stream_in = if rpc.is_input_streamed() { "stream " } else { "" };
        let stream_out = if rpc.is_output_streamed() { "stream " } else { "" };
        let line = format!(
            "  rpc {} ({stream_in}{}) returns ({stream_out}{});",
            rpc.name(),
            rpc.input(),
            rpc.output(),
        );
        match rpc.comment() {
            Some(comment) => writeln!(out, "{line} // {comment}")?,
            None => writeln!(out, "{line}")?,
        }
    }

    writeln!(out, "}}")?;
    Ok(out)
}
