use std::sync::Arc;

use tracing::debug;

use crate::error::RequestError;
use crate::media::{parse_accept, AcceptEntry, MediaType, Specificity};
use crate::routing::Route;
use crate::transform::{Reader, Writer};

/// Resolve the reader for a request body.
///
/// The candidate set is the route's bound readers (those compatible with
/// its `consumes` list). Candidates compatible with the request content
/// type are ranked by pairing specificity; ties keep registration order. A
/// missing Content-Type header negotiates as `*/*`, which any bound reader
/// satisfies at full-wildcard rank.
pub fn resolve_reader(
    route: &Route,
    content_type: Option<&str>,
) -> Result<Arc<dyn Reader>, RequestError> {
    let requested = match content_type {
        Some(raw) => MediaType::parse(raw).ok_or_else(|| RequestError::UnsupportedMediaType {
            content_type: Some(raw.to_string()),
        })?,
        None => MediaType::wildcard(),
    };

    let mut best: Option<(Specificity, &Arc<dyn Reader>)> = None;
    for (media, reader) in route.readers() {
        if let Some(specificity) = media.matches(&requested) {
            if best.map_or(true, |(held, _)| specificity > held) {
                best = Some((specificity, reader));
            }
        }
    }

    match best {
        Some((specificity, reader)) => {
            debug!(
                requested = %requested,
                resolved = %reader.media_type(),
                specificity = ?specificity,
                "Reader resolved"
            );
            Ok(Arc::clone(reader))
        }
        None => Err(RequestError::UnsupportedMediaType {
            content_type: content_type.map(str::to_string),
        }),
    }
}

/// Resolve the writer for a response entity.
///
/// Accept entries are tried in descending quality (header order on ties).
/// Within an entry, a writer is a candidate when its media type is
/// compatible with both the entry and at least one of the route's
/// `produces` types; candidates are ranked by specificity against the
/// entry, ties keeping registration order. The winning writer's concrete
/// media type becomes the response Content-Type.
pub fn resolve_writer(
    route: &Route,
    accept: Option<&str>,
    writers: &[(MediaType, Arc<dyn Writer>)],
) -> Result<(MediaType, Arc<dyn Writer>), RequestError> {
    let entries: Vec<AcceptEntry> = match accept {
        Some(header) => parse_accept(header),
        None => vec![AcceptEntry {
            media: MediaType::wildcard(),
            quality: 1.0,
        }],
    };

    for entry in &entries {
        let mut best: Option<(Specificity, &MediaType, &Arc<dyn Writer>)> = None;
        for (media, writer) in writers {
            let Some(specificity) = media.matches(&entry.media) else {
                continue;
            };
            if !route.produced().iter().any(|p| p.matches(media).is_some()) {
                continue;
            }
            if best.map_or(true, |(held, _, _)| specificity > held) {
                best = Some((specificity, media, writer));
            }
        }
        if let Some((specificity, media, writer)) = best {
            debug!(
                accepted = %entry.media,
                quality = entry.quality,
                resolved = %media,
                specificity = ?specificity,
                "Writer resolved"
            );
            return Ok((media.clone(), Arc::clone(writer)));
        }
    }

    Err(RequestError::NotAcceptable)
}
