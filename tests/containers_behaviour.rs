// tests/containers_behaviour.rs

use taskforge::containers::{
    Bst, DoublyLinkedList, Heap, HeapKind, RingQueue, SinglyLinkedList, Stack,
};

#[test]
fn ring_queue_rejects_the_sixth_enqueue() {
    let mut ring = RingQueue::with_capacity(5);
    for i in 0..5 {
        assert_eq!(ring.enqueue(i), Ok(()));
    }
    assert!(ring.is_full());

    // The rejected element comes back untouched and the contents are
    // unchanged.
    assert_eq!(ring.enqueue(99), Err(99));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);

    // After one dequeue there is room again.
    assert_eq!(ring.dequeue(), Some(0));
    assert_eq!(ring.enqueue(5), Ok(()));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn ring_queue_resets_cursors_on_last_dequeue() {
    let mut ring = RingQueue::with_capacity(5);
    assert!(ring.cursors().is_none());

    ring.enqueue("only").unwrap();
    assert_eq!(ring.cursors(), Some((0, 0)));

    assert_eq!(ring.dequeue(), Some("only"));
    assert!(ring.is_empty());
    assert!(ring.cursors().is_none());

    // A fresh enqueue starts over from slot 0.
    ring.enqueue("next").unwrap();
    assert_eq!(ring.cursors(), Some((0, 0)));
}

#[test]
fn ring_queue_wraps_around() {
    let mut ring = RingQueue::with_capacity(3);
    ring.enqueue(1).unwrap();
    ring.enqueue(2).unwrap();
    ring.enqueue(3).unwrap();
    assert_eq!(ring.dequeue(), Some(1));
    assert_eq!(ring.dequeue(), Some(2));
    ring.enqueue(4).unwrap();
    ring.enqueue(5).unwrap();

    assert_eq!(ring.front(), Some(&3));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
}

#[test]
fn doubly_list_positional_insert_and_backward_traversal() {
    let mut list = DoublyLinkedList::new();
    for value in ["a", "b", "c", "d"] {
        list.insert_at_end(value);
    }

    assert!(list.insert_at_position("x", 2));
    assert_eq!(list.to_vec(), ["a", "b", "x", "c", "d"]);
    // `prev` links from the tail see the same sequence backwards.
    assert_eq!(list.to_vec_reversed(), ["d", "c", "x", "b", "a"]);
}

#[test]
fn doubly_list_keeps_back_links_through_deletes() {
    let mut list = DoublyLinkedList::new();
    for value in [1, 2, 3, 4, 5] {
        list.insert_at_end(value);
    }

    assert_eq!(list.delete_at_position(2), Some(3));
    assert_eq!(list.delete_from_beginning(), Some(1));
    assert_eq!(list.delete_from_end(), Some(5));

    assert_eq!(list.to_vec(), [2, 4]);
    assert_eq!(list.to_vec_reversed(), [4, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn doubly_list_rejects_out_of_range_positions() {
    let mut list = DoublyLinkedList::new();
    list.insert_at_end("a");
    list.insert_at_end("b");

    assert!(!list.insert_at_position("x", 2));
    assert!(!list.insert_at_position("x", 7));
    assert_eq!(list.delete_at_position(5), None);
    assert_eq!(list.to_vec(), ["a", "b"]);
}

#[test]
fn singly_list_positional_contract() {
    let mut list = SinglyLinkedList::new();

    // Position 0 always succeeds, even on an empty list.
    assert!(list.insert_at_position("b", 0));
    list.insert_at_beginning("a");
    list.insert_at_end("c");
    assert_eq!(list.to_vec(), ["a", "b", "c"]);

    // Positions at or past the length are a silent no-op, reported
    // explicitly.
    assert!(!list.insert_at_position("x", 3));
    assert_eq!(list.to_vec(), ["a", "b", "c"]);

    assert!(list.insert_at_position("x", 1));
    assert_eq!(list.to_vec(), ["a", "x", "b", "c"]);
}

#[test]
fn singly_list_search_and_delete() {
    let mut list = SinglyLinkedList::new();
    for value in [10, 20, 30, 20] {
        list.insert_at_end(value);
    }

    // First equal element wins.
    assert_eq!(list.search(&20), Some(1));
    assert_eq!(list.search(&99), None);

    assert_eq!(list.delete_at_position(1), Some(20));
    assert_eq!(list.delete_from_end(), Some(20));
    assert_eq!(list.delete_from_beginning(), Some(10));
    assert_eq!(list.to_vec(), [30]);

    assert_eq!(list.delete_from_end(), Some(30));
    assert!(list.is_empty());
    assert_eq!(list.delete_from_beginning(), None);
    assert_eq!(list.delete_at_position(0), None);
}

#[test]
fn bst_three_case_deletion() {
    let mut bst = Bst::new();
    for value in [50, 30, 70, 20, 40, 60, 80] {
        assert!(bst.insert(value));
    }

    // Leaf.
    assert!(bst.remove(&20));
    // One child: 30 now has only 40 under it.
    assert!(bst.remove(&30));
    // Two children: the root is replaced by its in-order successor (60).
    assert!(bst.remove(&50));

    assert!(!bst.remove(&999));
    assert_eq!(bst.to_sorted_vec(), [40, 60, 70, 80]);
    assert!(bst.contains(&60));
    assert!(!bst.contains(&50));
    assert_eq!(bst.len(), 4);
}

#[test]
fn bst_traversal_orders() {
    let mut bst = Bst::new();
    for value in [50, 30, 70, 20, 40] {
        bst.insert(value);
    }

    let mut preorder = Vec::new();
    bst.preorder(|&k| preorder.push(k));
    assert_eq!(preorder, [50, 30, 20, 40, 70]);

    let mut postorder = Vec::new();
    bst.postorder(|&k| postorder.push(k));
    assert_eq!(postorder, [20, 40, 30, 70, 50]);

    let mut inorder = Vec::new();
    bst.inorder(|&k| inorder.push(k));
    assert_eq!(inorder, [20, 30, 40, 50, 70]);
}

#[test]
fn bst_shape_mirrors_the_tree() {
    let mut bst = Bst::new();
    for value in [2, 1, 3] {
        bst.insert(value);
    }

    let shape = bst.shape().unwrap();
    assert_eq!(shape.key, 2);
    assert_eq!(shape.left.as_ref().map(|n| n.key), Some(1));
    assert_eq!(shape.right.as_ref().map(|n| n.key), Some(3));
}

#[test]
fn heap_peek_and_empty_extract() {
    let mut heap: Heap<i32, &str> = Heap::new(HeapKind::Max);
    assert!(heap.extract().is_none());
    assert!(heap.peek().is_none());

    heap.insert(3, "low");
    heap.insert(9, "high");
    assert_eq!(heap.peek(), Some((&9, &"high")));
    assert_eq!(heap.extract(), Some((9, "high")));
    assert_eq!(heap.len(), 1);
}

#[test]
fn stack_is_lifo() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None::<i32>);

    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.as_slice(), [1, 2]);
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}
