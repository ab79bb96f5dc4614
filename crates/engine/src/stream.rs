//! Stream driver
//!
//! Runs a [`TransformContext`] over a `Read`/`Write` pair in chunks of
//! `buffer_blocks * block_size` bytes. Padding and the fixlength trailer
//! are applied once, at the logical end of the stream, so the output is
//! byte-identical to a single-buffer transform of the whole input.
//!
//! Output is written as chunks complete; on failure whatever was already
//! written stays written.

use std::io::{ErrorKind, Read, Write};

use mcrypt_api::error::validation;
use mcrypt_api::{Direction, Error, Result};
use mcrypt_common::SecretVec;
use tracing::{debug, trace};

use crate::context::TransformContext;
use crate::global;
use crate::padding;

/// Per-call options of the stream driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Apply (encrypt) or undo (decrypt) the fixlength trailer
    pub fixlength: bool,
    /// Blocks per chunk; `None` uses the configured default
    pub buffer_blocks: Option<usize>,
}

impl StreamOptions {
    /// Encrypt defaults: fixlength on
    pub fn for_encrypt() -> Self {
        Self {
            fixlength: true,
            buffer_blocks: None,
        }
    }

    /// Decrypt defaults: fixlength off
    pub fn for_decrypt() -> Self {
        Self {
            fixlength: false,
            buffer_blocks: None,
        }
    }

    /// Set the fixlength flag
    pub fn with_fixlength(mut self, fixlength: bool) -> Self {
        self.fixlength = fixlength;
        self
    }

    /// Set the chunk size in blocks
    pub fn with_buffer_blocks(mut self, buffer_blocks: usize) -> Self {
        self.buffer_blocks = Some(buffer_blocks);
        self
    }
}

/// Encrypt `input` into `output` with fixlength on
pub fn encrypt_file<R: Read, W: Write>(
    ctx: &mut TransformContext,
    input: R,
    output: W,
) -> Result<()> {
    transform_stream(ctx, Direction::Encrypt, input, output, &StreamOptions::for_encrypt())
}

/// Decrypt `input` into `output` with fixlength off
pub fn decrypt_file<R: Read, W: Write>(
    ctx: &mut TransformContext,
    input: R,
    output: W,
) -> Result<()> {
    transform_stream(ctx, Direction::Decrypt, input, output, &StreamOptions::for_decrypt())
}

/// Transform everything readable from `input` into `output`
pub fn transform_stream<R: Read, W: Write>(
    ctx: &mut TransformContext,
    direction: Direction,
    mut input: R,
    mut output: W,
    options: &StreamOptions,
) -> Result<()> {
    let blocks = options.buffer_blocks.unwrap_or_else(global::buffer_blocks);
    validation::parameter(blocks > 0, "buffer_blocks", "must be at least 1")?;
    let chunk = blocks
        .checked_mul(ctx.get_block_size().max(1))
        .ok_or_else(|| Error::param("buffer_blocks", "chunk size overflows"))?;
    ctx.begin(direction)?;
    let unit = ctx.unit_len();

    let stats = match direction {
        Direction::Encrypt => encrypt_chunks(ctx, &mut input, &mut output, chunk, unit, options)?,
        Direction::Decrypt if unit > 1 => {
            decrypt_block_chunks(ctx, &mut input, &mut output, chunk, unit, options)?
        }
        Direction::Decrypt => decrypt_byte_chunks(ctx, &mut input, &mut output, chunk)?,
    };
    output.flush()?;

    debug!(
        %direction,
        algorithm = ctx.algorithm(),
        mode = ctx.mode(),
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        chunks = stats.chunks,
        "stream transformed"
    );
    Ok(())
}

#[derive(Default)]
struct Stats {
    bytes_in: u64,
    bytes_out: u64,
    chunks: u64,
}

impl Stats {
    fn record(&mut self, read: usize, written: usize) {
        self.bytes_in += read as u64;
        self.bytes_out += written as u64;
        self.chunks += 1;
        trace!(read, written, chunk = self.chunks, "chunk done");
    }
}

fn encrypt_chunks<R: Read, W: Write>(
    ctx: &mut TransformContext,
    input: &mut R,
    output: &mut W,
    chunk: usize,
    unit: usize,
    options: &StreamOptions,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut buffer = SecretVec::zeroed(chunk);

    loop {
        let buf = buffer.as_mut_slice();
        let n = fill(input, buf)?;
        if n == chunk {
            ctx.transform_in_place(buf, Direction::Encrypt)?;
            output.write_all(buf)?;
            stats.record(n, n);
            continue;
        }

        // chunk is a multiple of unit, so n % unit is the total remainder
        let len = padding::padded_len(n, unit, options.fixlength);
        let last = &mut buf[..len];
        last[n..].fill(0);
        if options.fixlength && unit > 1 {
            padding::write_trailer(last, n % unit);
        }
        ctx.transform_in_place(last, Direction::Encrypt)?;
        output.write_all(last)?;
        stats.record(n, len);
        return Ok(stats);
    }
}

fn decrypt_block_chunks<R: Read, W: Write>(
    ctx: &mut TransformContext,
    input: &mut R,
    output: &mut W,
    chunk: usize,
    unit: usize,
    options: &StreamOptions,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut current = SecretVec::zeroed(chunk);
    let mut next = SecretVec::zeroed(chunk);
    let mut n = fill(input, current.as_mut_slice())?;

    loop {
        // the chunk is final when it is short or nothing decryptable follows
        let mut following = 0;
        let is_last = n < chunk || {
            following = fill(input, next.as_mut_slice())?;
            following < unit
        };

        let len = padding::whole_units(n, unit);
        let data = &mut current.as_mut_slice()[..len];
        ctx.transform_in_place(data, Direction::Decrypt)?;
        let keep = if is_last && options.fixlength {
            padding::recovered_len(data, unit)
        } else {
            len
        };
        output.write_all(&data[..keep])?;
        stats.record(n + if is_last { following } else { 0 }, keep);

        if is_last {
            return Ok(stats);
        }
        core::mem::swap(&mut current, &mut next);
        n = following;
    }
}

fn decrypt_byte_chunks<R: Read, W: Write>(
    ctx: &mut TransformContext,
    input: &mut R,
    output: &mut W,
    chunk: usize,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut buffer = SecretVec::zeroed(chunk);

    loop {
        let n = fill(input, buffer.as_mut_slice())?;
        let data = &mut buffer.as_mut_slice()[..n];
        ctx.transform_in_place(data, Direction::Decrypt)?;
        output.write_all(data)?;
        stats.record(n, n);
        if n < chunk {
            return Ok(stats);
        }
    }
}

/// Read until `buf` is full or the input ends
fn fill<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(filled)
}
