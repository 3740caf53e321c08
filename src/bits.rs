//! # 比特编解码模块
//!
//! 字节序列与比特序列之间的转换，每个字节按高位在前 (MSB-first) 展开。

/// 由单个比特组成的有序序列。
pub type BitStream = Vec<bool>;

/// 将字节序列展开为比特序列，长度恒为 `8 * bytes.len()`。
pub fn to_bits(bytes: &[u8]) -> BitStream {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect()
}

/// 将比特序列按 8 位一组还原为字节。
///
/// 长度不是 8 的倍数时，末尾不足一组的比特被丢弃。
pub fn from_bits(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8).map(byte_from_group).collect()
}

/// 将恰好 8 个比特 (高位在前) 组合为一个字节。
fn byte_from_group(group: &[bool]) -> u8 {
    group
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_bits_is_msb_first() {
        let bits = to_bits(&[0b1000_0001, b'A']);
        let expected = [
            true, false, false, false, false, false, false, true, // 0x81
            false, true, false, false, false, false, false, true, // 'A' = 0x41
        ];
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_empty_input_yields_empty_stream() {
        assert!(to_bits(&[]).is_empty());
        assert!(from_bits(&[]).is_empty());
    }

    #[test]
    fn test_from_bits_drops_trailing_partial_group() {
        let mut bits = to_bits(b"ok");
        bits.extend([true, true, true]);
        assert_eq!(from_bits(&bits), b"ok");
    }

    proptest! {
        #[test]
        fn prop_bits_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let bits = to_bits(&bytes);
            prop_assert_eq!(bits.len(), bytes.len() * 8);
            prop_assert_eq!(from_bits(&bits), bytes);
        }
    }
}
