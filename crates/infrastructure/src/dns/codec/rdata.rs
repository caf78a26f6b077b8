//! Per-type RDATA decoding into the textual `data` representation.
//!
//! Each supported record type has its own decode arm; unknown types and
//! records whose decoded text comes out empty produce `None`, and the
//! caller drops the record from the answer list.

use quorum_dns_domain::RecordType;

use super::name;
use super::{read_u16, read_u32};

/// Decode the RDATA of a record with wire type `code` located at
/// `message[offset..offset + rdlength]`.
pub(crate) fn decode(code: u16, message: &[u8], offset: usize, rdlength: usize) -> Option<String> {
    let data = match RecordType::from_u16(code)? {
        RecordType::A => decode_a(message, offset, rdlength)?,
        RecordType::AAAA => decode_aaaa(message, offset, rdlength)?,
        RecordType::MX => decode_mx(message, offset)?,
        RecordType::CNAME | RecordType::NS | RecordType::PTR => name::read_name(message, offset),
        RecordType::TXT => decode_txt(message, offset, rdlength),
        RecordType::SRV => decode_srv(message, offset)?,
        RecordType::SOA => decode_soa(message, offset, rdlength)?,
    };

    if data.is_empty() {
        None
    } else {
        Some(data)
    }
}

fn decode_a(message: &[u8], offset: usize, rdlength: usize) -> Option<String> {
    if rdlength != 4 {
        return None;
    }
    let octets = message.get(offset..offset + 4)?;
    Some(
        octets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join("."),
    )
}

fn decode_aaaa(message: &[u8], offset: usize, rdlength: usize) -> Option<String> {
    if rdlength != 16 {
        return None;
    }
    let bytes = message.get(offset..offset + 16)?;

    let groups: Vec<String> = bytes
        .chunks_exact(2)
        .map(|pair| format!("{:x}", u16::from_be_bytes([pair[0], pair[1]])))
        .collect();

    Some(compress_zero_run(&groups))
}

/// Collapse the first contiguous run of zero groups to `::`.
///
/// This is intentionally not RFC 5952: no longest-run selection, no
/// tie-breaking. One run collapses, the rest stay literal.
fn compress_zero_run(groups: &[String]) -> String {
    let run_start = groups.iter().position(|g| g == "0");

    match run_start {
        None => groups.join(":"),
        Some(start) => {
            let end = groups[start..]
                .iter()
                .position(|g| g != "0")
                .map_or(groups.len(), |i| start + i);
            format!(
                "{}::{}",
                groups[..start].join(":"),
                groups[end..].join(":")
            )
        }
    }
}

fn decode_mx(message: &[u8], offset: usize) -> Option<String> {
    let priority = read_u16(message, offset)?;
    let exchange = name::read_name(message, offset + 2);
    Some(format!("{} {}", priority, exchange))
}

fn decode_txt(message: &[u8], offset: usize, rdlength: usize) -> String {
    let end = offset + rdlength;
    let mut parts: Vec<String> = Vec::new();
    let mut pos = offset;

    while pos < end {
        let len = message[pos] as usize;
        pos += 1;
        if len > 0 && pos + len <= end {
            parts.push(String::from_utf8_lossy(&message[pos..pos + len]).into_owned());
            pos += len;
        } else {
            break;
        }
    }

    parts.concat()
}

fn decode_srv(message: &[u8], offset: usize) -> Option<String> {
    let priority = read_u16(message, offset)?;
    let weight = read_u16(message, offset + 2)?;
    let port = read_u16(message, offset + 4)?;
    let target = name::read_name(message, offset + 6);
    Some(format!("{} {} {} {}", priority, weight, port, target))
}

fn decode_soa(message: &[u8], offset: usize, rdlength: usize) -> Option<String> {
    let mname = name::read_name(message, offset);
    let after_mname = name::skip_name(message, offset);
    let rname = name::read_name(message, after_mname);
    let after_rname = name::skip_name(message, after_mname);

    // the five 32-bit fields must fit inside this record's RDATA
    if after_rname + 20 > offset + rdlength {
        return None;
    }

    let serial = read_u32(message, after_rname)?;
    let refresh = read_u32(message, after_rname + 4)?;
    let retry = read_u32(message, after_rname + 8)?;
    let expire = read_u32(message, after_rname + 12)?;
    let minimum = read_u32(message, after_rname + 16)?;

    Some(format!(
        "{} {} {} {} {} {} {}",
        mname, rname, serial, refresh, retry, expire, minimum
    ))
}
