/// 负载结束标记：写在消息比特之后的 16 位固定图案 `1111111111111110`。
pub const TERMINATOR: [bool; 16] = [
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true, false,
];

/// 提取时用于判定消息结束的 8 位分组 (即结束标记的第一个字节)。
/// 任何值为 0xFF 的消息字节都会被误判为结束。
pub const SENTINEL_BYTE: u8 = 0xFF;

/// 每个像素参与隐写的通道数 (R, G, B)。
pub const CHANNELS: usize = 3;

/// 长度前缀帧格式中，消息字节长度占用的比特数 (`u64`，大端，高位在前)。
pub const LENGTH_PREFIX_BITS: usize = 64;

/// 默认的日志文件路径，以追加方式打开。
pub const DEFAULT_LOG_FILE: &str = "steganography.log";
