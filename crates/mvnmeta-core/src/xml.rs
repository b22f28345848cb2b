//! `maven-metadata.xml` reading and writing.
//!
//! The reader accepts every element of the 1.0.0 and 1.1.0 schemas in any
//! order, ignores namespaces and unknown elements, and reports malformed
//! documents as [`MetadataError::Xml`] (stream failures stay
//! [`MetadataError::Io`]). The writer emits elements in the standard Maven
//! order and preserves list order.

use std::io::{BufRead, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use mvnmeta_util::errors::{MetadataError, MetadataResult};

use crate::model::{Metadata, Plugin, Snapshot, SnapshotVersion, Versioning};

/// Parse a metadata document from a buffered stream.
pub fn read<R: BufRead>(input: R) -> MetadataResult<Metadata> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut meta = Metadata::default();
    let mut seen_root = false;
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut buf = Vec::new();

    // Accumulators for repeated nested elements
    let mut current_sv: Option<SnapshotVersion> = None;
    let mut current_plugin: Option<Plugin> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(from_xml_error)?;
        match event {
            Event::Start(ref e) => {
                let tag = local_name(e);
                if path.is_empty() {
                    open_root(&mut meta, &mut seen_root, &tag, e)?;
                }
                path.push(tag);
                text_buf.clear();
                open_element(&path.join(">"), &mut meta, &mut current_sv, &mut current_plugin);
            }
            Event::Empty(ref e) => {
                let tag = local_name(e);
                if path.is_empty() {
                    open_root(&mut meta, &mut seen_root, &tag, e)?;
                }
                path.push(tag);
                text_buf.clear();
                let ctx = path.join(">");
                open_element(&ctx, &mut meta, &mut current_sv, &mut current_plugin);
                close_element(&ctx, "", &mut meta, &mut current_sv, &mut current_plugin)?;
                path.pop();
            }
            Event::Text(ref e) => {
                let text = e.unescape().map_err(from_xml_error)?;
                text_buf.push_str(&text);
            }
            Event::CData(ref e) => {
                text_buf.push_str(&String::from_utf8_lossy(e));
            }
            Event::End(_) => {
                let ctx = path.join(">");
                close_element(&ctx, &text_buf, &mut meta, &mut current_sv, &mut current_plugin)?;
                path.pop();
                text_buf.clear();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(MetadataError::Xml {
            message: "document has no <metadata> root element".to_string(),
        });
    }
    if !path.is_empty() {
        return Err(MetadataError::Xml {
            message: format!("unexpected end of document inside <{}>", path.join(">")),
        });
    }

    Ok(meta)
}

/// Parse a metadata document from a string.
pub fn read_str(xml: &str) -> MetadataResult<Metadata> {
    read(xml.as_bytes())
}

/// Parse a metadata document from raw bytes.
pub fn read_bytes(xml: &[u8]) -> MetadataResult<Metadata> {
    read(xml)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

fn open_root(
    meta: &mut Metadata,
    seen_root: &mut bool,
    tag: &str,
    e: &BytesStart<'_>,
) -> MetadataResult<()> {
    if *seen_root || tag != "metadata" {
        return Err(MetadataError::Xml {
            message: format!("expected a single <metadata> root element, found <{tag}>"),
        });
    }
    *seen_root = true;

    for attr in e.attributes() {
        let attr = attr.map_err(from_xml_error)?;
        if attr.key.local_name().as_ref() == b"modelVersion" {
            let value = attr.unescape_value().map_err(from_xml_error)?;
            meta.model_version = Some(value.to_string());
        }
    }
    Ok(())
}

fn open_element(
    ctx: &str,
    meta: &mut Metadata,
    current_sv: &mut Option<SnapshotVersion>,
    current_plugin: &mut Option<Plugin>,
) {
    match ctx {
        "metadata>versioning" => {
            meta.versioning_mut();
        }
        "metadata>versioning>snapshot" => {
            meta.versioning_mut().snapshot = Some(Snapshot::default());
        }
        "metadata>versioning>snapshotVersions>snapshotVersion" => {
            *current_sv = Some(SnapshotVersion::default());
        }
        "metadata>plugins>plugin" => {
            *current_plugin = Some(Plugin::default());
        }
        _ => {}
    }
}

fn close_element(
    ctx: &str,
    text: &str,
    meta: &mut Metadata,
    current_sv: &mut Option<SnapshotVersion>,
    current_plugin: &mut Option<Plugin>,
) -> MetadataResult<()> {
    let value = || Some(text.to_string());

    match ctx {
        "metadata>groupId" => meta.group_id = value(),
        "metadata>artifactId" => meta.artifact_id = value(),
        "metadata>version" => meta.version = value(),

        "metadata>versioning>latest" => meta.versioning_mut().latest = value(),
        "metadata>versioning>release" => meta.versioning_mut().release = value(),
        "metadata>versioning>lastUpdated" => meta.versioning_mut().last_updated = value(),
        "metadata>versioning>versions>version" => {
            meta.versioning_mut().versions.push(text.to_string());
        }

        "metadata>versioning>snapshot>timestamp" => snapshot_mut(meta).timestamp = value(),
        "metadata>versioning>snapshot>buildNumber" => {
            let build_number = text.trim().parse().map_err(|e| MetadataError::Xml {
                message: format!("invalid <buildNumber> '{text}': {e}"),
            })?;
            snapshot_mut(meta).build_number = build_number;
        }
        "metadata>versioning>snapshot>localCopy" => {
            snapshot_mut(meta).local_copy = text.trim().eq_ignore_ascii_case("true");
        }

        "metadata>versioning>snapshotVersions>snapshotVersion>classifier" => {
            if let Some(sv) = current_sv.as_mut() {
                sv.classifier = value();
            }
        }
        "metadata>versioning>snapshotVersions>snapshotVersion>extension" => {
            if let Some(sv) = current_sv.as_mut() {
                sv.extension = value();
            }
        }
        "metadata>versioning>snapshotVersions>snapshotVersion>value" => {
            if let Some(sv) = current_sv.as_mut() {
                sv.version = value();
            }
        }
        "metadata>versioning>snapshotVersions>snapshotVersion>updated" => {
            if let Some(sv) = current_sv.as_mut() {
                sv.updated = value();
            }
        }
        "metadata>versioning>snapshotVersions>snapshotVersion" => {
            if let Some(sv) = current_sv.take() {
                meta.versioning_mut().snapshot_versions.push(sv);
            }
        }

        "metadata>plugins>plugin>name" => {
            if let Some(p) = current_plugin.as_mut() {
                p.name = value();
            }
        }
        "metadata>plugins>plugin>prefix" => {
            if let Some(p) = current_plugin.as_mut() {
                p.prefix = value();
            }
        }
        "metadata>plugins>plugin>artifactId" => {
            if let Some(p) = current_plugin.as_mut() {
                p.artifact_id = value();
            }
        }
        "metadata>plugins>plugin" => {
            if let Some(p) = current_plugin.take() {
                meta.plugins.push(p);
            }
        }
        _ => {}
    }
    Ok(())
}

fn snapshot_mut(meta: &mut Metadata) -> &mut Snapshot {
    meta.versioning_mut()
        .snapshot
        .get_or_insert_with(Snapshot::default)
}

fn from_xml_error(e: impl Into<quick_xml::Error>) -> MetadataError {
    match e.into() {
        quick_xml::Error::Io(io) => MetadataError::Io(std::io::Error::new(io.kind(), io.to_string())),
        other => MetadataError::Xml {
            message: other.to_string(),
        },
    }
}

/// Serialize a metadata document, returning the document for chaining.
pub fn write<W: Write>(metadata: &Metadata, out: W) -> MetadataResult<&Metadata> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("metadata");
    if let Some(ref model_version) = metadata.model_version {
        root.push_attribute(("modelVersion", model_version.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    write_opt(&mut writer, "groupId", &metadata.group_id)?;
    write_opt(&mut writer, "artifactId", &metadata.artifact_id)?;
    write_opt(&mut writer, "version", &metadata.version)?;
    if let Some(ref versioning) = metadata.versioning {
        write_versioning(&mut writer, versioning)?;
    }
    if !metadata.plugins.is_empty() {
        start(&mut writer, "plugins")?;
        for plugin in &metadata.plugins {
            start(&mut writer, "plugin")?;
            write_opt(&mut writer, "name", &plugin.name)?;
            write_opt(&mut writer, "prefix", &plugin.prefix)?;
            write_opt(&mut writer, "artifactId", &plugin.artifact_id)?;
            end(&mut writer, "plugin")?;
        }
        end(&mut writer, "plugins")?;
    }

    end(&mut writer, "metadata")?;
    writer.get_mut().write_all(b"\n")?;
    Ok(metadata)
}

/// Serialize a metadata document into a byte buffer.
pub fn write_to_vec(metadata: &Metadata) -> MetadataResult<Vec<u8>> {
    let mut out = Vec::new();
    write(metadata, &mut out)?;
    Ok(out)
}

fn write_versioning<W: Write>(writer: &mut Writer<W>, versioning: &Versioning) -> MetadataResult<()> {
    start(writer, "versioning")?;
    write_opt(writer, "latest", &versioning.latest)?;
    write_opt(writer, "release", &versioning.release)?;

    if let Some(ref snapshot) = versioning.snapshot {
        start(writer, "snapshot")?;
        write_opt(writer, "timestamp", &snapshot.timestamp)?;
        if snapshot.build_number != 0 {
            write_text(writer, "buildNumber", &snapshot.build_number.to_string())?;
        }
        if snapshot.local_copy {
            write_text(writer, "localCopy", "true")?;
        }
        end(writer, "snapshot")?;
    }

    if !versioning.versions.is_empty() {
        start(writer, "versions")?;
        for version in &versioning.versions {
            write_text(writer, "version", version)?;
        }
        end(writer, "versions")?;
    }

    write_opt(writer, "lastUpdated", &versioning.last_updated)?;

    if !versioning.snapshot_versions.is_empty() {
        start(writer, "snapshotVersions")?;
        for sv in &versioning.snapshot_versions {
            start(writer, "snapshotVersion")?;
            write_opt(writer, "classifier", &sv.classifier)?;
            write_opt(writer, "extension", &sv.extension)?;
            write_opt(writer, "value", &sv.version)?;
            write_opt(writer, "updated", &sv.updated)?;
            end(writer, "snapshotVersion")?;
        }
        end(writer, "snapshotVersions")?;
    }

    end(writer, "versioning")
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> MetadataResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> MetadataResult<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> MetadataResult<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    end(writer, name)
}

fn write_opt<W: Write>(writer: &mut Writer<W>, name: &str, value: &Option<String>) -> MetadataResult<()> {
    match value {
        Some(v) => write_text(writer, name, v),
        None => Ok(()),
    }
}
