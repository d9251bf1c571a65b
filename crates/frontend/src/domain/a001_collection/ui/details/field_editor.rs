use std::collections::HashSet;

use contracts::domain::a001_collection::{FieldDefinition, FieldType};
use contracts::shared::catalog::move_field;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Comma separated select options; `None` when nothing remains
pub fn parse_options(raw: &str) -> Option<Vec<String>> {
    let options: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!options.is_empty()).then_some(options)
}

pub fn format_options(field: &FieldDefinition) -> String {
    field.select_options().join(", ")
}

/// Editable, reorderable table of a collection's field definitions.
///
/// Rows are rebuilt only when the row count or order changes; cell edits go
/// straight into `fields`.
#[component]
pub fn FieldEditor(fields: RwSignal<Vec<FieldDefinition>>) -> impl IntoView {
    let selected = RwSignal::new(HashSet::<usize>::new());
    let dragging = RwSignal::new(Option::<usize>::None);
    // bumped whenever rows change position
    let layout_version = RwSignal::new(0u32);
    let row_count = Memo::new(move |_| fields.with(|f| f.len()));

    let reorder = move |from: usize, to: usize| {
        let mut moved = false;
        fields.update(|f| moved = move_field(f, from, to));
        if moved {
            selected.set(HashSet::new());
            layout_version.update(|v| *v += 1);
        }
    };

    let add_field = move |_: leptos::ev::MouseEvent| {
        fields.update(|f| f.push(FieldDefinition::new("", "", FieldType::Text)));
    };

    let delete_at = move |index: usize| {
        fields.update(|f| {
            if index < f.len() {
                f.remove(index);
            }
        });
        selected.set(HashSet::new());
        layout_version.update(|v| *v += 1);
    };

    let delete_selected = move |_: leptos::ev::MouseEvent| {
        let chosen = selected.get_untracked();
        if chosen.is_empty() {
            return;
        }
        fields.update(|f| {
            let mut index = 0;
            f.retain(|_| {
                let keep = !chosen.contains(&index);
                index += 1;
                keep
            });
        });
        selected.set(HashSet::new());
        layout_version.update(|v| *v += 1);
    };

    let toggle_all = move |checked: bool| {
        if checked {
            selected.set((0..row_count.get_untracked()).collect());
        } else {
            selected.set(HashSet::new());
        }
    };

    let update = move |index: usize, apply: Box<dyn FnOnce(&mut FieldDefinition)>| {
        fields.update(|f| {
            if let Some(field) = f.get_mut(index) {
                apply(field);
            }
        });
    };

    let row = move |index: usize| {
        let read = move |get: fn(&FieldDefinition) -> String| {
            move || fields.with(|f| f.get(index).map(get).unwrap_or_default())
        };
        let flag = move |get: fn(&FieldDefinition) -> bool| {
            move || fields.with(|f| f.get(index).map(get).unwrap_or(false))
        };
        let is_select = flag(|f| f.field_type == FieldType::Select);

        view! {
            <tr
                class="table__row"
                class:table__row--dragging=move || dragging.get() == Some(index)
                draggable="true"
                on:dragstart=move |_| dragging.set(Some(index))
                on:dragover=|ev| ev.prevent_default()
                on:drop=move |ev| {
                    ev.prevent_default();
                    if let Some(from) = dragging.get_untracked() {
                        reorder(from, index);
                    }
                    dragging.set(None);
                }
                on:dragend=move |_| dragging.set(None)
            >
                <td class="table__cell table__cell--checkbox">
                    <input
                        type="checkbox"
                        class="table__checkbox"
                        prop:checked=move || selected.with(|s| s.contains(&index))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            selected.update(|s| {
                                if checked {
                                    s.insert(index);
                                } else {
                                    s.remove(&index);
                                }
                            });
                        }
                    />
                </td>
                <td class="table__cell table__cell--order">
                    <button
                        type="button"
                        class="button button--icon"
                        title="Move up"
                        disabled=move || index == 0
                        on:click=move |_| reorder(index, index.saturating_sub(1))
                    >
                        {icon("chevron-up")}
                    </button>
                    <button
                        type="button"
                        class="button button--icon"
                        title="Move down"
                        disabled=move || { index + 1 >= row_count.get() }
                        on:click=move |_| reorder(index, index + 1)
                    >
                        {icon("chevron-down")}
                    </button>
                </td>
                <td class="table__cell">
                    <input
                        type="text"
                        class="input"
                        placeholder="field_key"
                        prop:value=read(|f| f.key.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(index, Box::new(move |f| f.key = value));
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="text"
                        class="input"
                        placeholder="Label"
                        prop:value=read(|f| f.label.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(index, Box::new(move |f| f.label = value));
                        }
                    />
                </td>
                <td class="table__cell">
                    <select
                        class="select"
                        prop:value=read(|f| f.field_type.as_str().to_string())
                        on:change=move |ev| {
                            let value = FieldType::from_str_lossy(&event_target_value(&ev));
                            update(index, Box::new(move |f| f.field_type = value));
                        }
                    >
                        {FieldType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </td>
                <td class="table__cell table__cell--center">
                    <input
                        type="checkbox"
                        title="Required"
                        prop:checked=flag(|f| f.required)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            update(index, Box::new(move |f| f.required = checked));
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="text"
                        class="input"
                        placeholder="Placeholder"
                        prop:value=read(|f| f.placeholder.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(index, Box::new(move |f| {
                                f.placeholder = (!value.is_empty()).then_some(value);
                            }));
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="text"
                        class="input"
                        placeholder="a, b, c"
                        disabled=move || !is_select()
                        prop:value=read(format_options)
                        on:change=move |ev| {
                            let value = parse_options(&event_target_value(&ev));
                            update(index, Box::new(move |f| f.options = value));
                        }
                    />
                </td>
                <td class="table__cell table__cell--center">
                    <input
                        type="checkbox"
                        title="Sortable"
                        prop:checked=flag(|f| f.sortable == Some(true))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            update(index, Box::new(move |f| f.sortable = Some(checked)));
                        }
                    />
                </td>
                <td class="table__cell table__cell--center">
                    <input
                        type="checkbox"
                        title="Searchable"
                        prop:checked=flag(|f| f.searchable == Some(true))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            update(index, Box::new(move |f| f.searchable = Some(checked)));
                        }
                    />
                </td>
                <td class="table__cell table__cell--center">
                    <input
                        type="checkbox"
                        title="Shown on public pages"
                        prop:checked=flag(FieldDefinition::is_public)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            update(index, Box::new(move |f| {
                                f.show_in_public = (!checked).then_some(false);
                            }));
                        }
                    />
                </td>
                <td class="table__cell">
                    <button
                        type="button"
                        class="button button--icon"
                        title="Delete field"
                        on:click=move |_| delete_at(index)
                    >
                        {icon("delete")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="field-editor">
            <div class="field-editor__header">
                <h3>"Fields"</h3>
                <div class="field-editor__actions">
                    <Show when=move || selected.with(|s| !s.is_empty())>
                        <button type="button" class="button button--secondary" on:click=delete_selected>
                            {icon("delete")}
                            {move || format!("Delete selected ({})", selected.with(|s| s.len()))}
                        </button>
                    </Show>
                    <button type="button" class="button button--primary" on:click=add_field>
                        {icon("plus")}
                        "Add field"
                    </button>
                </div>
            </div>

            <Show
                when=move || row_count.get() != 0
                fallback=|| view! { <p class="field-editor__empty">"No fields yet. Items will only have a registration date."</p> }
            >
                <div class="table">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || {
                                            let n = row_count.get();
                                            n > 0 && selected.with(|s| s.len() == n)
                                        }
                                        on:change=move |ev| toggle_all(event_target_checked(&ev))
                                    />
                                </th>
                                <th class="table__header-cell">"Order"</th>
                                <th class="table__header-cell">"Key"</th>
                                <th class="table__header-cell">"Label"</th>
                                <th class="table__header-cell">"Type"</th>
                                <th class="table__header-cell">"Required"</th>
                                <th class="table__header-cell">"Placeholder"</th>
                                <th class="table__header-cell">"Options"</th>
                                <th class="table__header-cell">"Sortable"</th>
                                <th class="table__header-cell">"Searchable"</th>
                                <th class="table__header-cell">"Public"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                layout_version.track();
                                (0..row_count.get()).map(row).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert_eq!(
            parse_options(" new, used ,, mint "),
            Some(vec!["new".to_string(), "used".to_string(), "mint".to_string()])
        );
        assert_eq!(parse_options(" , "), None);
    }

    #[test]
    fn test_format_options() {
        let mut field = FieldDefinition::new("condition", "Condition", FieldType::Select);
        field.options = parse_options("new,used");
        assert_eq!(format_options(&field), "new, used");
    }
}
