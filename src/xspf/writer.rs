//! XSPF document writer
//!
//! Produces XSPF 1.0 with the VLC extension namespace. The flat
//! `<trackList>` carries every track of the tree in depth-first order; the
//! trailing `<extension>` block restates the folder hierarchy as nested
//! `<vlc:node>` groups whose `<vlc:item>` entries reference tracks by tid.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ExportError;
use crate::model::{FolderNode, TrackNode};

const XSPF_NS: &str = "http://xspf.org/ns/0/";
const VLC_NS: &str = "http://www.videolan.org/vlc/playlist/ns/0/";
const VLC_APPLICATION: &str = "http://www.videolan.org/vlc/playlist/0";

/// Render the playlist document for one root's tree.
///
/// The output is a pure function of the tree: identical trees serialize
/// to identical bytes.
pub fn write_document(tree: &FolderNode) -> Result<Vec<u8>, ExportError> {
    document(tree).map_err(|err| ExportError::Serialize {
        root: tree.path.clone(),
        message: format!("{err:#}"),
    })
}

fn document(tree: &FolderNode) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut playlist = BytesStart::new("playlist");
    playlist.push_attribute(("xmlns", XSPF_NS));
    playlist.push_attribute(("xmlns:vlc", VLC_NS));
    playlist.push_attribute(("version", "1"));
    writer.write_event(Event::Start(playlist))?;

    let tracks = tree.tracks_depth_first();

    text_element(&mut writer, "title", &tree.name)?;
    text_element(
        &mut writer,
        "annotation",
        &annotation(tracks.len(), tree.total_duration_ms),
    )?;
    text_element(&mut writer, "location", &encode_location(&tree.path))?;

    writer.write_event(Event::Start(BytesStart::new("trackList")))?;
    for (tid, track) in tracks.iter().enumerate() {
        write_track(&mut writer, tid, track)?;
    }
    writer.write_event(Event::End(BytesEnd::new("trackList")))?;

    write_grouping(&mut writer, tree)?;

    writer.write_event(Event::End(BytesEnd::new("playlist")))?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    Ok(xml)
}

fn write_track<W: Write>(writer: &mut Writer<W>, tid: usize, track: &TrackNode) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("track")))?;

    text_element(writer, "location", &encode_location(&track.path))?;
    text_element(writer, "title", &track.title)?;
    text_element(writer, "trackNum", &(tid + 1).to_string())?;
    text_element(writer, "duration", &track.duration_ms.to_string())?;

    let mut extension = BytesStart::new("extension");
    extension.push_attribute(("application", VLC_APPLICATION));
    writer.write_event(Event::Start(extension))?;
    text_element(writer, "vlc:id", &tid.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("extension")))?;

    writer.write_event(Event::End(BytesEnd::new("track")))?;
    Ok(())
}

/// One in-flight folder during the grouping walk
enum GroupFrame<'a> {
    Open(&'a FolderNode),
    Close,
}

/// Write the `<extension>` block that mirrors the folder hierarchy.
///
/// The walk visits folders in the same order as
/// [`FolderNode::tracks_depth_first`], so the running tid counter assigns
/// every `<vlc:item>` the id its track received in the `<trackList>`.
fn write_grouping<W: Write>(writer: &mut Writer<W>, tree: &FolderNode) -> Result<()> {
    let mut extension = BytesStart::new("extension");
    extension.push_attribute(("application", VLC_APPLICATION));
    writer.write_event(Event::Start(extension))?;

    let mut next_tid = 0usize;
    write_items(writer, &tree.tracks, &mut next_tid)?;

    let mut stack: Vec<GroupFrame> = Vec::new();
    for child in tree.children.iter().rev() {
        stack.push(GroupFrame::Open(child));
    }

    while let Some(frame) = stack.pop() {
        match frame {
            GroupFrame::Open(folder) => {
                let mut node = BytesStart::new("vlc:node");
                node.push_attribute(("title", folder.name.as_str()));
                writer.write_event(Event::Start(node))?;

                write_items(writer, &folder.tracks, &mut next_tid)?;

                stack.push(GroupFrame::Close);
                for child in folder.children.iter().rev() {
                    stack.push(GroupFrame::Open(child));
                }
            }
            GroupFrame::Close => {
                writer.write_event(Event::End(BytesEnd::new("vlc:node")))?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("extension")))?;
    Ok(())
}

fn write_items<W: Write>(
    writer: &mut Writer<W>,
    tracks: &[TrackNode],
    next_tid: &mut usize,
) -> Result<()> {
    for _ in tracks {
        let mut item = BytesStart::new("vlc:item");
        item.push_attribute(("tid", next_tid.to_string().as_str()));
        writer.write_event(Event::Empty(item))?;
        *next_tid += 1;
    }
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Percent-encode a filesystem path for an XSPF `<location>`, keeping the
/// path separators readable
fn encode_location(path: &Path) -> String {
    path.to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn annotation(track_count: usize, total_duration_ms: u64) -> String {
    let plural = if track_count == 1 { "" } else { "s" };
    format!(
        "{} track{}, total duration {}",
        track_count,
        plural,
        format_duration(total_duration_ms)
    )
}

/// Render a millisecond total as `H:MM:SS`, hours unpadded
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}
