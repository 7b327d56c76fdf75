/// Number of hardware threads a render pass can use, or `0` if the platform
/// cannot tell. Callers treat `0` as "render on a single band".
#[must_use]
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(0)
}
