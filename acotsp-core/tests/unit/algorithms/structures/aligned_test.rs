use super::*;

fn address_of<T>(slice: &[T]) -> usize {
    slice.as_ptr() as usize
}

parameterized_test! {can_create_aligned_buffer, len, {
    can_create_aligned_buffer_impl(len);
}}

can_create_aligned_buffer! {
    case01_empty: 0,
    case02_one: 1,
    case03_less_than_line: 7,
    case04_many_lines: 1000,
}

fn can_create_aligned_buffer_impl(len: usize) {
    let buffer = AlignedBuffer::new(len, 1.5_f64).unwrap();

    assert_eq!(buffer.len(), len);
    assert_eq!(buffer.is_empty(), len == 0);
    assert_eq!(address_of(buffer.as_slice()) % CACHE_LINE, 0);
    assert!(buffer.as_slice().iter().all(|&value| value == 1.5));
}

#[test]
fn can_calculate_elements_per_line() {
    assert_eq!(elements_per_line::<f64>(), 8);
    assert_eq!(elements_per_line::<u64>(), 8);
    assert_eq!(elements_per_line::<u8>(), 64);
    assert_eq!(elements_per_line::<[u8; 128]>(), 1);
}

parameterized_test! {can_create_padded_arena, (slots, slot_len, pad_blocks, expected_stride), {
    can_create_padded_arena_impl(slots, slot_len, pad_blocks, expected_stride);
}}

can_create_padded_arena! {
    case01_no_padding: (4, 8, 0, 8),
    case02_one_block: (4, 8, 1, 16),
    case03_partial_line: (3, 5, 1, 16),
    case04_two_blocks: (2, 17, 2, 40),
    case05_empty_slot: (2, 0, 0, 8),
}

fn can_create_padded_arena_impl(slots: usize, slot_len: usize, pad_blocks: usize, expected_stride: usize) {
    let mut arena = PaddedArena::new(slots, slot_len, pad_blocks, 0_usize).unwrap();

    assert_eq!(arena.stride(), expected_stride);
    assert_eq!(arena.slots(), slots);
    assert_eq!(arena.slot_len(), slot_len);

    let addresses = arena.slots_mut().map(|slot| (address_of(slot), slot.len())).collect::<Vec<_>>();
    assert_eq!(addresses.len(), slots);
    addresses.iter().for_each(|&(address, len)| {
        assert_eq!(address % CACHE_LINE, 0);
        assert_eq!(len, slot_len);
    });
    addresses.windows(2).for_each(|pair| {
        let gap = pair[1].0 - pair[0].0;
        assert_eq!(gap, expected_stride * std::mem::size_of::<usize>());
        assert!(gap >= slot_len * std::mem::size_of::<usize>() + pad_blocks * CACHE_LINE);
    });
}

#[test]
fn can_write_slots_independently() {
    let mut arena = PaddedArena::new(3, 4, 1, 0_u64).unwrap();

    arena.slots_mut().enumerate().for_each(|(idx, slot)| slot.iter_mut().for_each(|value| *value = idx as u64 + 1));
    arena.slot_mut(1)[0] = 42;

    assert_eq!(arena.slot(0), &[1, 1, 1, 1]);
    assert_eq!(arena.slot(1), &[42, 2, 2, 2]);
    assert_eq!(arena.slot(2), &[3, 3, 3, 3]);
}
