use bit_element::{bucket_count, BitElementIter, BitMap, ClearOnRemove, Positions, SetBits};

fn main() {
    const BIT_COUNT: usize = 20;
    let bitmap = BitMap::<BIT_COUNT, { bucket_count(BIT_COUNT) }>::from_ones_iter([3, 11, 19]);

    // the iterator may own its bitmap outright
    let mut iter = BitElementIter::new(bitmap, ClearOnRemove::new(Positions));
    assert_eq!(iter.next_element(), Ok(3));
    iter.remove().unwrap();
    assert_eq!(iter.next_element(), Ok(11));

    let (rest, _) = iter.into_parts();
    assert_eq!(rest.first_set_bit(), Some(11));
    assert_eq!(SetBits::next_set_bit(&rest, 12), Some(19));

    // `bitmap` itself is untouched, it was copied in
    assert!(bitmap.is_set(3));
}
