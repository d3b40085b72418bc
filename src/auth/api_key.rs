//! API Key 处理模块

use sha2::{Digest, Sha256};
use std::fmt;

/// 进程级 API Key，启动时加载，之后不再修改
///
/// 只保存密钥的 SHA-256 摘要，比较时对两个摘要做定长比较。
#[derive(Clone)]
pub struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: digest(secret),
        }
    }

    /// 校验客户端提供的密钥是否与配置一致
    ///
    /// 对两个定长摘要做异或累积比较；编译器并不严格保证该循环保持常数时间。
    pub fn verify(&self, provided: &str) -> bool {
        let provided = digest(provided);
        self.digest
            .iter()
            .zip(provided.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

// 不在日志中暴露密钥
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
