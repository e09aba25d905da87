#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use mb_reflect as reflect;
pub use mb_utils as utils;
