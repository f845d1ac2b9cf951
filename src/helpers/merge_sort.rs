/// Sorts `values` ascending by [`f64::total_cmp`].
///
/// Ranges longer than `threshold` are halved and the halves sorted on
/// separate rayon tasks, then merged through a scratch buffer of the same
/// length. Call it inside the pool that should do the work.
pub fn par_merge_sort(values: &mut [f64], threshold: usize) {
    let mut scratch = vec![0.0; values.len()];
    sort_range(values, &mut scratch, threshold.max(1));
}

fn sort_range(values: &mut [f64], scratch: &mut [f64], threshold: usize) {
    if values.len() <= threshold {
        values.sort_unstable_by(f64::total_cmp);
        return;
    }

    let mid = values.len() / 2;
    {
        let (left, right) = values.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        rayon::join(
            || sort_range(left, scratch_left, threshold),
            || sort_range(right, scratch_right, threshold),
        );
        merge(left, right, scratch);
    }
    values.copy_from_slice(scratch);
}

fn merge(left: &[f64], right: &[f64], out: &mut [f64]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j == right.len() || (i < left.len() && left[i].total_cmp(&right[j]).is_le());
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
