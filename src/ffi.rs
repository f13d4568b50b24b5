//! C ABI for embedding the router behind a foreign-call boundary.
//!
//! Arrays cross the boundary flat: node coordinates as `2 * node_count`
//! ints, the adjacency as one concatenated index array sliced by
//! `node_count + 1` offsets. The route comes back as a heap buffer of
//! `2 * steps` i64 values - an empty buffer means no path, a null return
//! means the input was malformed. Every buffer must be released with
//! [`gridroute_route_free`].

use std::ptr;

use crate::graph::network::Point;

#[repr(C)]
pub struct RouteBuffer {
    pub coords: *mut i64,
    /// Number of i64 values in `coords` (two per route step)
    pub len: usize,
}

#[no_mangle]
pub extern "C" fn gridroute_find_path(
    node_coords: *const i32,
    node_count: usize,
    neighbor_indices: *const u32,
    neighbor_offsets: *const usize,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> *mut RouteBuffer {
    if node_count > 0 && (node_coords.is_null() || neighbor_offsets.is_null()) {
        return ptr::null_mut();
    }

    let (nodes, neighbors) = if node_count == 0 {
        (Vec::new(), Vec::new())
    } else {
        let coords = unsafe { std::slice::from_raw_parts(node_coords, node_count * 2) };
        let offsets = unsafe { std::slice::from_raw_parts(neighbor_offsets, node_count + 1) };

        let total = offsets[node_count];
        let indices: &[u32] = if total == 0 {
            &[]
        } else if neighbor_indices.is_null() {
            return ptr::null_mut();
        } else {
            unsafe { std::slice::from_raw_parts(neighbor_indices, total) }
        };

        let nodes = (0..node_count)
            .map(|i| Point::new(coords[2 * i], coords[2 * i + 1]))
            .collect();

        let mut neighbors = Vec::with_capacity(node_count);
        for i in 0..node_count {
            let (lo, hi) = (offsets[i], offsets[i + 1]);
            if lo > hi || hi > total {
                return ptr::null_mut();
            }
            neighbors.push(indices[lo..hi].iter().map(|&v| v as usize).collect());
        }
        (nodes, neighbors)
    };

    let start = Point::new(start_x, start_y);
    let end = Point::new(end_x, end_y);

    match crate::find_path(nodes, neighbors, start, end) {
        Ok(route) => {
            let mut flat: Vec<i64> = Vec::with_capacity(route.len() * 2);
            for point in route {
                flat.push(i64::from(point.x));
                flat.push(i64::from(point.y));
            }
            let len = flat.len();
            let coords = flat.as_mut_ptr();
            std::mem::forget(flat);
            Box::into_raw(Box::new(RouteBuffer { coords, len }))
        }
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn gridroute_route_free(route: *mut RouteBuffer) {
    if !route.is_null() {
        unsafe {
            let buffer = Box::from_raw(route);
            if !buffer.coords.is_null() {
                drop(Vec::from_raw_parts(buffer.coords, buffer.len, buffer.len));
            }
        }
    }
}
