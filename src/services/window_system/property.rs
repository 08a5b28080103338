//! Разбор ответов GetProperty.
//!
//! Тип, формат и длина проверяются до чтения элементов через `value32()`.

use x11rb::protocol::xproto::{Atom, AtomEnum, GetPropertyReply};

use crate::error::Result;
use crate::events::{MaximizationState, WindowId};
use crate::swap_error;

/// Свойство не установлено на окне
fn is_absent(reply: &GetPropertyReply) -> bool {
    reply.type_ == x11rb::NONE && reply.value.is_empty()
}

/// Элементы формата 32 после проверки типа и длины буфера
fn items32(reply: &GetPropertyReply, expected_type: Atom, name: &str) -> Result<Vec<u32>> {
    if reply.type_ != expected_type {
        return Err(swap_error!(
            query,
            "свойство {} имеет тип {}, ожидался {}",
            name,
            reply.type_,
            expected_type
        ));
    }

    let items = reply.value32().ok_or_else(|| {
        swap_error!(query, "свойство {} имеет формат {}, ожидался 32", name, reply.format)
    })?;

    if reply.value.len() != reply.value_len as usize * 4 {
        return Err(swap_error!(
            query,
            "свойство {}: {} байт на {} элементов",
            name,
            reply.value.len(),
            reply.value_len
        ));
    }

    Ok(items.collect())
}

/// `_NET_ACTIVE_WINDOW`: первый элемент, ненулевой
pub fn decode_active_window(reply: &GetPropertyReply) -> Result<WindowId> {
    if is_absent(reply) {
        return Err(swap_error!(
            query,
            "свойство _NET_ACTIVE_WINDOW отсутствует (оконный менеджер не поддерживает EWMH?)"
        ));
    }

    let items = items32(reply, AtomEnum::WINDOW.into(), "_NET_ACTIVE_WINDOW")?;
    match items.first() {
        Some(&window) if window != x11rb::NONE => Ok(window),
        Some(_) => Err(swap_error!(query, "нет активного окна")),
        None => Err(swap_error!(query, "свойство _NET_ACTIVE_WINDOW пустое")),
    }
}

/// `_NET_WM_STATE`: список атомов, из которого берутся только флаги развёрнутости
pub fn decode_maximization(
    reply: &GetPropertyReply,
    maximized_vert: Atom,
    maximized_horz: Atom,
) -> Result<MaximizationState> {
    if is_absent(reply) {
        return Ok(MaximizationState::default());
    }

    let atoms = items32(reply, AtomEnum::ATOM.into(), "_NET_WM_STATE")?;
    Ok(MaximizationState {
        vertical: atoms.contains(&maximized_vert),
        horizontal: atoms.contains(&maximized_horz),
    })
}
