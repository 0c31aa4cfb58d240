//! Shared fixtures for unit tests.

use crate::ingest::IngestionPipeline;
use crate::parser::GstDebugParser;
use crate::session::{MemorySessionStore, SessionId, SessionStore};
use std::sync::Arc;

/// Six entries: two pids, three levels, one line of noise.
pub(crate) const SAMPLE_LOG: &str = "\
0:00:00.000100000 100 0x1 INFO GST_INIT gst.c:586:init_pre: Initializing GStreamer Core Library
0:00:00.000150000 100 0x1 ERROR GST_PADS gstpad.c:4797:gst_pad_push_data:<queue0:src> not linked
0:00:00.000900000 100 0x2 INFO GST_STATES gstbin.c:2916:gst_bin_change_state_func:<pipeline0> state change PAUSED
this line is not a log entry
0:00:01.200000000 200 0x2 DEBUG basesrc gstbasesrc.c:3127:gst_base_src_loop:<videotestsrc0> pushing buffer
0:00:02.000000000 200 0x3 WARN GST_PADS gstpad.c:5000:gst_pad_link_full:<queue0:sink> caps mismatch
0:00:02.000500000 100 0x1 INFO queue gstqueue.c:1200:gst_queue_chain:<queue0> queue filled
";

pub(crate) fn pipeline() -> IngestionPipeline {
    IngestionPipeline::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(GstDebugParser::new()),
    )
}

/// A pipeline whose store holds one ready session parsed from [`SAMPLE_LOG`].
pub(crate) fn ready_pipeline() -> (IngestionPipeline, SessionId) {
    let pipeline = pipeline();
    let id = pipeline.store().create();
    pipeline.ingest(&id, SAMPLE_LOG.as_bytes()).unwrap();
    (pipeline, id)
}

pub(crate) fn ready_session() -> (Arc<dyn SessionStore>, SessionId) {
    let (pipeline, id) = ready_pipeline();
    (pipeline.store().clone(), id)
}
