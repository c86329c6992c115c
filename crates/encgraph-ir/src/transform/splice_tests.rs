use crate::test_utils::int_record;
use crate::splice_skip;

#[test]
fn skip_middle_field() {
    let (code, fields) = int_record(&["a", "b", "c"]);
    let (mut g, head) = code.into_parts();
    let [a, b, c] = fields[..] else {
        panic!("expected three fields")
    };

    splice_skip(&mut g, a, b);

    assert_eq!(g[a].next_field, Some(c));
    assert!(g.walk(head).all(|id| id != b));
    insta::assert_snapshot!(crate::disassemble(&g, head), @r"
    [0]StructFieldHeadInt ([idx:0][key:a][offset:0][headIdx:0])
    [2]StructFieldInt ([idx:2][key:c][offset:16][headIdx:0])
    [3]StructEnd ([idx:3])
    ");
}

#[test]
fn skip_consecutive_fields_from_same_prev() {
    let (code, fields) = int_record(&["a", "b", "c", "d"]);
    let (mut g, head) = code.into_parts();

    splice_skip(&mut g, fields[0], fields[1]);
    splice_skip(&mut g, fields[0], fields[2]);

    let path: Vec<_> = g.walk(head).collect();
    assert_eq!(path[..2], [fields[0], fields[3]]);
    assert_eq!(g[fields[0]].next_field, Some(fields[3]));
}

#[test]
fn skip_last_field() {
    let (code, fields) = int_record(&["a", "b", "c"]);
    let (mut g, head) = code.into_parts();
    let struct_end = g[fields[2]].next_field;

    splice_skip(&mut g, fields[1], fields[2]);

    assert_eq!(g[fields[1]].next_field, struct_end);
    assert_eq!(g.walk(head).count(), 3);
}

#[test]
#[should_panic(expected = "is not on the field chain")]
fn skip_unreachable_field_panics() {
    let (code, fields) = int_record(&["a", "b", "c"]);
    let (mut g, _) = code.into_parts();

    splice_skip(&mut g, fields[2], fields[0]);
}

#[test]
#[should_panic(expected = "from itself")]
fn skip_self_panics() {
    let (code, fields) = int_record(&["a"]);
    let (mut g, _) = code.into_parts();

    splice_skip(&mut g, fields[0], fields[0]);
}
