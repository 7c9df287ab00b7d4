//! LDPC(174,91) encoding against matrices loaded from disk.
//!
//! The generator matrix lives in `generator.dat`, one row per line as 91
//! `'0'`/`'1'` characters; lines of any other shape are ignored. The parity
//! check matrix lives in `parity.dat` in the WSJT-X column-oriented form:
//! after the comment header, each line names the three 1-based rows of the
//! 83x174 matrix that hold a one in that column.
//!
//! Rows of the generator are held as `u128` masks so a parity bit is one
//! AND plus a popcount. The parity check matrix is not consulted during
//! encoding; it backs the `H * c = 0` assertions in the test suite and the
//! facade's diagnostic check.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bitvec::prelude::*;
use snafu::{ResultExt, Snafu};
use tracing::info;

use crate::constants::{LDPC_K, LDPC_M, LDPC_N};
use crate::util::bitvec_utils::FromBitSlice;

/// Substrings that mark a `parity.dat` line as commentary.
const PARITY_COMMENT_MARKERS: [&str; 3] = ["file specifies", "matrix", "ones"];

#[derive(Debug, Snafu)]
pub enum MatrixError {
    /// Matrix file missing or unreadable
    #[snafu(display("cannot open matrix file {}: {source}", path.display()))]
    FileOpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Generator file did not yield exactly 83 binary rows
    #[snafu(display("generator matrix has {rows} usable rows, expected {LDPC_M}"))]
    InvalidGeneratorMatrix { rows: usize },

    /// Parity file did not yield 174 columns
    #[snafu(display("parity matrix has {columns} usable columns, expected {LDPC_N}"))]
    InvalidParityMatrix { columns: usize },
}

/// The 83x91 generator matrix, one `u128` bitmask per parity row.
#[derive(Debug, Clone)]
pub struct GeneratorMatrix {
    rows: Vec<u128>,
}

impl GeneratorMatrix {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).context(FileOpenFailedSnafu { path })?;

        let mut rows = Vec::with_capacity(LDPC_M);
        for line in BufReader::new(file).lines() {
            let line = line.context(FileOpenFailedSnafu { path })?;
            let line = line.trim();
            if line.len() != LDPC_K || !line.bytes().all(|b| b == b'0' || b == b'1') {
                continue;
            }
            let mut row = 0u128;
            for b in line.bytes() {
                row = (row << 1) | u128::from(b - b'0');
            }
            rows.push(row);
        }

        if rows.len() != LDPC_M {
            return Err(MatrixError::InvalidGeneratorMatrix { rows: rows.len() });
        }

        info!(path = %path.display(), rows = rows.len(), "loaded generator matrix");
        Ok(GeneratorMatrix { rows })
    }

    /// Extend a 91-bit block to the 174-bit systematic codeword.
    pub fn encode(&self, block: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        debug_assert_eq!(block.len(), LDPC_K);
        let message = u128::from_bitslice(block);

        let mut codeword = block.to_bitvec();
        codeword.reserve(LDPC_M);
        for row in &self.rows {
            codeword.push((row & message).count_ones() & 1 == 1);
        }
        codeword
    }
}

/// The 83x174 parity check matrix in column-index form: for each codeword
/// column, the three rows holding a one.
#[derive(Debug, Clone)]
pub struct ParityMatrix {
    columns: Vec<[usize; 3]>,
}

impl ParityMatrix {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).context(FileOpenFailedSnafu { path })?;

        let mut columns = Vec::with_capacity(LDPC_N);
        for line in BufReader::new(file).lines() {
            let line = line.context(FileOpenFailedSnafu { path })?;
            let line = line.trim();
            if line.is_empty() || PARITY_COMMENT_MARKERS.iter().any(|m| line.contains(m)) {
                continue;
            }
            let indices: Vec<usize> = line
                .split_whitespace()
                .filter_map(|field| field.parse().ok())
                .collect();
            if indices.len() != 3 || indices.iter().any(|&i| i == 0 || i > LDPC_M) {
                continue;
            }
            // 1-based in the file
            columns.push([indices[0] - 1, indices[1] - 1, indices[2] - 1]);
            if columns.len() == LDPC_N {
                break;
            }
        }

        if columns.len() != LDPC_N {
            return Err(MatrixError::InvalidParityMatrix {
                columns: columns.len(),
            });
        }

        info!(path = %path.display(), "loaded parity check matrix");
        Ok(ParityMatrix { columns })
    }

    /// True when `H * c = 0` over GF(2).
    pub fn check(&self, codeword: &BitSlice<u8, Msb0>) -> bool {
        debug_assert_eq!(codeword.len(), LDPC_N);
        let mut accumulator = [0u8; LDPC_M];
        for (column, rows) in self.columns.iter().enumerate() {
            if codeword[column] {
                for &row in rows {
                    accumulator[row] ^= 1;
                }
            }
        }
        accumulator.iter().all(|&parity| parity == 0)
    }
}
