/// Deepest directory nesting a recursive copy will descend into.
/// Guards against runaway recursion through cyclic mounts or links.
pub const MAX_COPY_DEPTH: usize = 256;

/// Step between display-size units.
pub const SIZE_UNIT: u64 = 1024;
