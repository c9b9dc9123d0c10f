/// Height bound of a red-black tree with `n` nodes: `floor(2 * log2(n + 1))`.
pub fn max_height(n: usize) -> usize {
    // floor(2 * log2(m)) is the largest h with 2^h <= m^2
    let m = n as u128 + 1;
    let squared = m * m;
    (u128::BITS - 1 - squared.leading_zeros()) as usize
}
