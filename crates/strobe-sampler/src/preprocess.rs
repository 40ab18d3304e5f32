//! Asynchronous sample preprocessing.
//!
//! When the host hands a generator new sample data, analysis (waveform
//! peaks) runs on a worker thread so neither the UI nor the render path
//! stalls. Results publish through an [`AnalysisSlot`]; the render side
//! loads whatever is there and treats an empty slot as "not ready yet".
//! A failed or aborted job leaves the slot empty forever.

use arc_swap::ArcSwapOption;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use strobe_core::math::convert;

use crate::error::{Error, Result};

/// Frames folded into one waveform peak.
const FRAMES_PER_PEAK: usize = 512;

/// Host-provided description of the sample being preprocessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInfo {
    pub id: u64,
    pub num_channels: usize,
    pub num_frames: usize,
    pub sample_rate: u32,
}

/// Callbacks threaded through a preprocessing job.
///
/// `should_abort` is polled once per peak chunk; `report_progress`
/// receives a fraction in `[0, 1]` and always ends on `1.0` for a job
/// that completes.
pub struct PreprocessCallbacks {
    pub should_abort: Box<dyn Fn() -> bool + Send>,
    pub report_progress: Box<dyn Fn(f32) + Send>,
}

impl PreprocessCallbacks {
    /// No abort, no progress reporting.
    pub fn noop() -> Self {
        Self {
            should_abort: Box::new(|| false),
            report_progress: Box::new(|_| {}),
        }
    }
}

/// Waveform analysis produced by preprocessing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleAnalysis {
    /// Absolute peak per chunk of [`FRAMES_PER_PEAK`] frames, all
    /// channels folded together.
    pub peaks: Vec<f32>,
    pub frames_per_peak: usize,
}

impl SampleAnalysis {
    /// Peak level of one chunk in dB, for waveform labels.
    pub fn peak_db(&self, index: usize) -> Option<f32> {
        self.peaks.get(index).map(|p| convert::linear_to_db(*p))
    }
}

/// RT-safe publication slot for one sample's analysis.
pub struct AnalysisSlot {
    inner: ArcSwapOption<SampleAnalysis>,
}

impl AnalysisSlot {
    pub fn empty() -> Self {
        Self {
            inner: ArcSwapOption::from(None),
        }
    }

    pub fn ready(&self) -> bool {
        self.inner.load().is_some()
    }

    /// Lock-free read; callable from the render path.
    pub fn load(&self) -> Option<Arc<SampleAnalysis>> {
        self.inner.load_full()
    }

    fn publish(&self, analysis: SampleAnalysis) {
        self.inner.store(Some(Arc::new(analysis)));
    }
}

impl Default for AnalysisSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Analyze interleaved sample frames.
///
/// Runs synchronously; [`PreprocessWorker`] calls this off-thread.
pub fn analyze(
    info: &SampleInfo,
    frames: &[f32],
    callbacks: &PreprocessCallbacks,
) -> Result<SampleAnalysis> {
    if info.num_channels == 0 {
        return Err(Error::BadSampleData("zero channels".into()));
    }

    if frames.len() != info.num_channels * info.num_frames {
        return Err(Error::BadSampleData(format!(
            "expected {} samples, got {}",
            info.num_channels * info.num_frames,
            frames.len()
        )));
    }

    let chunk_len = FRAMES_PER_PEAK * info.num_channels;
    let num_chunks = frames.len().div_ceil(chunk_len).max(1);
    let mut peaks = Vec::with_capacity(num_chunks);

    for (i, chunk) in frames.chunks(chunk_len).enumerate() {
        if (callbacks.should_abort)() {
            return Err(Error::Aborted);
        }

        let peak = chunk.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        peaks.push(peak);

        (callbacks.report_progress)(i as f32 / num_chunks as f32);
    }

    (callbacks.report_progress)(1.0);

    Ok(SampleAnalysis {
        peaks,
        frames_per_peak: FRAMES_PER_PEAK,
    })
}

enum Command {
    Job(Job),
    Shutdown,
}

struct Job {
    info: SampleInfo,
    frames: Arc<Vec<f32>>,
    slot: Arc<AnalysisSlot>,
    callbacks: PreprocessCallbacks,
}

/// Worker thread running preprocessing jobs in submission order.
pub struct PreprocessWorker {
    command_tx: Sender<Command>,
    shutdown: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl PreprocessWorker {
    pub fn new(queue_capacity: usize) -> Self {
        let (tx, rx) = bounded(queue_capacity);
        let shutdown = Arc::new(AtomicBool::new(false));
        let worker_shutdown = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("strobe-preprocess".into())
            .spawn(move || worker_loop(rx, worker_shutdown))
            .expect("Failed to spawn preprocess thread");

        Self {
            command_tx: tx,
            shutdown,
            thread_handle: Some(handle),
        }
    }

    /// Queue a job. Returns `false` if the queue is full or the worker
    /// has shut down; the slot is left untouched either way.
    pub fn submit(
        &self,
        info: SampleInfo,
        frames: Arc<Vec<f32>>,
        slot: Arc<AnalysisSlot>,
        callbacks: PreprocessCallbacks,
    ) -> bool {
        self.command_tx
            .try_send(Command::Job(Job {
                info,
                frames,
                slot,
                callbacks,
            }))
            .is_ok()
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        let _ = self.command_tx.send(Command::Shutdown);

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PreprocessWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn worker_loop(rx: Receiver<Command>, shutdown: Arc<AtomicBool>) {
    for command in rx.iter() {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        match command {
            Command::Job(job) => match analyze(&job.info, &job.frames, &job.callbacks) {
                Ok(analysis) => job.slot.publish(analysis),
                Err(e) => {
                    tracing::warn!("Preprocessing of sample {} failed: {}", job.info.id, e);
                }
            },
            Command::Shutdown => break,
        }
    }
}
