//! Resource sets through the public API.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use rpki_resources::{
    AsBlocks, AsRange, Asn, Block, Chain, Ipv4Blocks, Ipv4Range, Ipv6Blocks,
    RangeError, ResourceSet, ResourceSetError,
};

fn v4(s: &str) -> Ipv4Addr {
    Ipv4Addr::from_str(s).unwrap()
}

fn v6(s: &str) -> Ipv6Addr {
    Ipv6Addr::from_str(s).unwrap()
}

#[test]
fn as_tokens_round_trip() {
    for token in &["0", "5", "5-10", "64496-64511", "0-4294967295"] {
        let blocks = AsBlocks::from_str(token).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.to_string(), *token);
    }
}

#[test]
fn as_ranges() {
    let blocks = AsBlocks::from_str("5").unwrap();
    let range = blocks.iter().next().unwrap();
    assert_eq!(range.min(), Asn::from_u32(5));
    assert_eq!(range.max(), Asn::from_u32(5));

    let range = AsRange::from_str("5-10").unwrap();
    assert_eq!(range.min(), Asn::from_u32(5));
    assert_eq!(range.max(), Asn::from_u32(10));

    assert_eq!(
        AsBlocks::from_str("10-5").unwrap_err().range_error(),
        Some(RangeError::Misordered)
    );
}

#[test]
fn ipv4_prefixes() {
    let blocks = Ipv4Blocks::from_str("10.0.0.0/24").unwrap();
    let range = blocks.iter().next().unwrap();
    assert_eq!(range.min(), v4("10.0.0.0"));
    assert_eq!(range.max(), v4("10.0.0.255"));
    assert_eq!(blocks.to_string(), "10.0.0.0/24");

    assert_eq!(
        Ipv4Blocks::from_str("10.0.0.1/24").unwrap_err().range_error(),
        Some(RangeError::NonCanonicalPrefix)
    );
}

#[test]
fn as_set_ordering() {
    let blocks = AsBlocks::from_str("5,1-3").unwrap();
    let bounds: Vec<_> = blocks.iter().map(|range| {
        (range.min().into_u32(), range.max().into_u32())
    }).collect();
    assert_eq!(bounds, vec![(1, 3), (5, 5)]);
    assert_eq!(blocks.to_string(), "1-3,5");
}

#[test]
fn overlap_and_adjacency() {
    let err = AsBlocks::from_str("1-5,3-10").unwrap_err();
    assert!(err.is_overlap());
    assert_eq!(err.input(), "1-5,3-10");

    let blocks = AsBlocks::from_str("1-3,4-6").unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks.to_string(), "1-3,4-6");
}

#[test]
fn ipv6_rendering() {
    let blocks = Ipv6Blocks::from_str("2001:db8::/32").unwrap();
    assert_eq!(blocks.to_string(), "2001:db8::/32");

    let blocks = Ipv6Blocks::from_str("2001:db8::-2001:db8::5").unwrap();
    assert_eq!(blocks.to_string(), "2001:db8::-2001:db8::5");
    let range = blocks.iter().next().unwrap();
    assert_eq!(range.bounds(), (v6("2001:db8::"), v6("2001:db8::5")));
}

#[test]
fn unaligned_range_is_not_a_prefix() {
    let range = Ipv4Range::from_str("10.0.0.1-10.0.0.2").unwrap();
    assert_eq!(range.prefix_len(), None);
    assert_eq!(range.to_string(), "10.0.0.1-10.0.0.2");
    assert_eq!(
        Ipv4Blocks::from_str("10.0.0.1-10.0.0.2").unwrap().to_string(),
        "10.0.0.1-10.0.0.2"
    );
}

#[test]
fn any_construction_failure_aborts() {
    for s in &["1,2,x", "1,2,", "1,3-2", "1-5,5", "1,AS2"] {
        assert!(AsBlocks::from_str(s).is_err(), "{}", s);
    }
    for s in &["10.0.0.0/8,10.0.0.1", "10.0.0.0/8,10.0.0.0/16"] {
        assert!(Ipv4Blocks::from_str(s).is_err(), "{}", s);
    }
}

#[test]
fn chains_from_blocks() {
    let chain = Chain::from_blocks(vec![
        Ipv4Range::from_str("192.168.0.0/16").unwrap(),
        Ipv4Range::from_prefix(v4("10.0.0.0"), 8).unwrap(),
    ]).unwrap();
    assert_eq!(chain.to_string(), "10.0.0.0/8,192.168.0.0/16");
    assert_eq!(
        chain,
        Ipv4Blocks::from_str("192.168.0.0/16,10.0.0.0/8").unwrap()
    );
}

#[test]
fn resource_sets() {
    let set = ResourceSet::from_strs(
        "65005, 65000-65003",
        "192.168.0.0/16, 10.0.0.0-10.0.0.255",
        "",
    ).unwrap();
    assert_eq!(
        set.to_string(),
        "asn: '65000-65003,65005', \
         ipv4: '10.0.0.0/24,192.168.0.0/16', ipv6: ''"
    );
    assert_eq!(set.ipv6_opt(), None);

    let shared = set.clone();
    let handle = std::thread::spawn(move || shared.asn().len());
    assert_eq!(handle.join().unwrap(), 2);

    match ResourceSet::from_strs("", "", "2001:db8::1/32") {
        Err(ResourceSetError::Ipv6(err)) => {
            assert_eq!(err.range_error(), Some(RangeError::NonCanonicalPrefix))
        }
        res => panic!("unexpected result {:?}", res),
    }
}
