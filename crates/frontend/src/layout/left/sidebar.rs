//! Navigation menu. Groups expand in place; leaf items open a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{
    KEY_BARANG, KEY_KATALOG_VENDOR, KEY_KATEGORI, KEY_NOTIFIKASI, KEY_PERMINTAAN, KEY_SUPPLIER,
    KEY_USERS,
};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
    admin_only: bool,
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "inventaris",
            label: "Inventaris",
            icon: "barang",
            items: vec![item(KEY_BARANG, "barang"), item(KEY_KATEGORI, "kategori")],
            admin_only: false,
        },
        MenuGroup {
            id: "pengadaan",
            label: "Pengadaan",
            icon: "permintaan",
            items: vec![
                item(KEY_PERMINTAAN, "permintaan"),
                item(KEY_KATALOG_VENDOR, "katalog"),
                item(KEY_SUPPLIER, "supplier"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: KEY_NOTIFIKASI,
            label: tab_label_for_key(KEY_NOTIFIKASI),
            icon: "notifikasi",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "administrasi",
            label: "Administrasi",
            icon: "users",
            items: vec![item(KEY_USERS, "users")],
            admin_only: true,
        },
    ]
}

fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|g| is_admin || !g.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();
    let is_admin = Memo::new(move |_| auth_state.with(|s| s.is_admin()));

    let expanded_groups = RwSignal::new(vec!["inventaris".to_string(), "pengadaan".to_string()]);
    let is_active = move |key: &str| ctx.active.with(|a| a.as_deref() == Some(key));

    view! {
        <nav class="app-sidebar__content">
            {move || visible_groups(is_admin.get()).into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id;

                let on_group_click = move |_| {
                    if has_children {
                        expanded_groups.update(|ids| {
                            if let Some(pos) = ids.iter().position(|x| x == group_id) {
                                ids.remove(pos);
                            } else {
                                ids.push(group_id.to_string());
                            }
                        });
                    } else {
                        ctx.open_tab(group_id, group.label);
                    }
                };
                let is_expanded = move || expanded_groups.with(|ids| ids.iter().any(|x| x == group_id));

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || !has_children && is_active(group_id)
                            on:click=on_group_click
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>
                        {has_children.then(|| {
                            let items = group.items.clone();
                            view! {
                                <div class="app-sidebar__children" class:app-sidebar__children--hidden=move || !is_expanded()>
                                    {items.into_iter().map(|(key, label, icon_name)| view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--child"
                                            class:app-sidebar__item--active=move || is_active(key)
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|(k, _, _)| *k))
            .collect()
    }

    #[test]
    fn test_users_menu_is_admin_only() {
        assert!(!keys(&visible_groups(false)).contains(&KEY_USERS));
        assert!(keys(&visible_groups(true)).contains(&KEY_USERS));
    }

    #[test]
    fn test_every_screen_is_reachable() {
        let all = keys(&visible_groups(true));
        for key in [KEY_BARANG, KEY_KATEGORI, KEY_SUPPLIER, KEY_KATALOG_VENDOR, KEY_PERMINTAAN] {
            assert!(all.contains(&key), "{} missing", key);
        }
        assert!(visible_groups(false).iter().any(|g| g.id == KEY_NOTIFIKASI));
    }
}
