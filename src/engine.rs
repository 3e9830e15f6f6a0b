// The implementation is based on:
// https://people.csail.mit.edu/rivest/Md5.c
// https://tools.ietf.org/html/rfc1321

#[rustfmt::skip]
const SHIFTS: [u32; 64] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21,
];

// f64::floor(power * f64::abs(f64::sin(i as f64 + 1.0))) as u32
const SINES: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

const STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

pub(crate) const BLOCK_LEN: usize = 64;

// Offset of the length field within the last block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// The trailing one or two blocks of a message: the bytes that did not fill a
/// whole block, the `0x80` marker, zeros and the 64-bit bit length.
pub(crate) struct Padding {
    buffer: [u8; 2 * BLOCK_LEN],
    blocks: usize,
}

impl Padding {
    /// Pad `tail` (fewer than 64 bytes) for a message of `length` bytes.
    pub(crate) fn new(tail: &[u8], length: u64) -> Padding {
        debug_assert!(tail.len() < BLOCK_LEN);

        let mut buffer = [0; 2 * BLOCK_LEN];
        let cursor = tail.len();
        buffer[..cursor].copy_from_slice(tail);
        buffer[cursor] = 0x80;

        // Not enough space to fit the length after the marker; spill into a second block.
        let blocks = if cursor < LENGTH_OFFSET { 1 } else { 2 };
        let end = blocks * BLOCK_LEN;

        // The length is in bits and wraps modulo 2^64.
        let bits = length.wrapping_mul(8);
        buffer[end - 8..end].copy_from_slice(&bits.to_le_bytes());

        Padding { buffer, blocks }
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.blocks * BLOCK_LEN]
    }
}

/// Compute the raw digest of data.
///
/// Whole blocks are read straight from `data`; only the tail is copied into a
/// stack buffer for padding. All working state lives in this call.
pub(crate) fn compute(data: &[u8]) -> [u8; 16] {
    let mut state = STATE;

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        transform(&mut state, block);
    }

    let padding = Padding::new(blocks.remainder(), data.len() as u64);
    for block in padding.as_bytes().chunks_exact(BLOCK_LEN) {
        transform(&mut state, block);
    }

    let mut output: [u8; 16] = [0; 16];
    for (bytes, word) in output.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
    output
}

#[inline(always)]
fn transform(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut segments: [u32; 16] = [0; 16];
    for (segment, word) in segments.iter_mut().zip(block.chunks_exact(4)) {
        *segment = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    for i in 0..16 {
        let f = (b & c) | (!b & d);
        let g = i;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 16..32 {
        let f = (d & b) | (!d & c);
        let g = (5 * i + 1) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 32..48 {
        let f = b ^ c ^ d;
        let g = (3 * i + 5) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 48..64 {
        let f = c ^ (b | !d);
        let g = (7 * i) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[inline(always)]
fn cycle(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, mut f: u32, g: u32, i: usize) {
    f = f.wrapping_add(*a).wrapping_add(SINES[i]).wrapping_add(g);
    *a = *d;
    *d = *c;
    *c = *b;
    *b = f.rotate_left(SHIFTS[i]).wrapping_add(*b);
}
