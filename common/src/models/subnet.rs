// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Subnet Model
//!
//! An address paired with an optional raw mask. Unlike
//! [`pnet::ipnetwork::IpNetwork`], the mask here is an arbitrary byte string:
//! it may be missing, shorter or longer than the address, or non-contiguous.
//! Address math has to cope with all of those shapes.

use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;

use crate::utils::ip::natural_len;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpMask(Vec<u8>);

impl IpMask {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Builds a contiguous mask of `prefix` leading ones over `bits` bits.
    ///
    /// Returns `None` when `bits` is not a whole number of octets or the
    /// prefix does not fit.
    pub fn from_prefix(prefix: u8, bits: u8) -> Option<Self> {
        if bits % 8 != 0 || prefix > bits {
            return None;
        }

        let mut remaining = prefix;
        let bytes = (0..bits / 8)
            .map(|_| {
                let ones = remaining.min(8);
                remaining -= ones;
                match ones {
                    0 => 0,
                    n => 0xffu8 << (8 - n),
                }
            })
            .collect();

        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the mask bytes lined up with an address of `addr_len` octets.
    ///
    /// A 16-byte mask whose first 12 bytes are all ones also applies to a
    /// 4-byte address. Any other length mismatch yields `None`.
    pub fn effective(&self, addr_len: usize) -> Option<&[u8]> {
        let bytes = self.0.as_slice();
        if bytes.len() == addr_len {
            return Some(bytes);
        }

        if addr_len == 4 && bytes.len() == 16 && bytes[..12].iter().all(|&b| b == 0xff) {
            return Some(&bytes[12..]);
        }

        None
    }
}

impl From<[u8; 4]> for IpMask {
    fn from(octets: [u8; 4]) -> Self {
        Self(octets.to_vec())
    }
}

impl From<[u8; 16]> for IpMask {
    fn from(octets: [u8; 16]) -> Self {
        Self(octets.to_vec())
    }
}

impl From<IpAddr> for IpMask {
    fn from(netmask: IpAddr) -> Self {
        match netmask {
            IpAddr::V4(v4) => v4.octets().into(),
            IpAddr::V6(v6) => v6.octets().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    pub ip: IpAddr,
    pub mask: Option<IpMask>,
}

impl Subnet {
    pub fn new(ip: IpAddr, mask: Option<IpMask>) -> Self {
        Self { ip, mask }
    }

    pub fn host(ip: IpAddr) -> Self {
        Self { ip, mask: None }
    }

    /// `true` when the subnet names exactly one address: there is no usable
    /// mask or every bit of it is set.
    pub fn is_single_host(&self) -> bool {
        let len = natural_len(&self.ip.to_canonical());
        match self.mask.as_ref().and_then(|m| m.effective(len)) {
            Some(mask) => mask.iter().all(|&b| b == 0xff),
            None => true,
        }
    }
}

impl From<IpNetwork> for Subnet {
    fn from(net: IpNetwork) -> Self {
        Self::new(net.ip(), Some(IpMask::from(net.mask())))
    }
}
