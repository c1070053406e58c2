use contracts::shared::list_query::FilterParams;
use contracts::system::users::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::{toggle_active, ChangePasswordDialog, UserFormDialog};
use crate::shared::components::{
    ConfirmDialog, FilterPanel, ListPager, ListStatus, PageHeader, SearchInput, SelectField,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::{run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::users::api;

fn role_filter_options() -> Vec<(String, String)> {
    Role::SELECTABLE
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    vec![
        ("true".to_string(), "Aktif".to_string()),
        ("false".to_string(), "Nonaktif".to_string()),
    ]
}

/// Wrapped in `RequireAdmin` by the tab registry.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let list = use_list::<User>(api::USERS, FilterParams::new());
    let notifications = use_notifications();
    let filters_expanded = RwSignal::new(true);

    // Some(None) = create, Some(Some(user)) = edit
    let editing = RwSignal::new(None::<Option<User>>);
    let password_for = RwSignal::new(None::<User>);
    let deleting = RwSignal::new(None::<User>);

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        list.refresh();
    });

    let set_active = move |user: User| {
        let dto = toggle_active(&user);
        let message = if dto.is_active { "Pengguna diaktifkan" } else { "Pengguna dinonaktifkan" };
        spawn_local(async move {
            if run_mutation(notifications, "Menyimpan status...", message, api::update_user(&dto))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(user) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus pengguna...", "Pengguna berhasil dihapus", api::delete_user(user.id))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    });

    let total_label = Signal::derive(move || format!("{} pengguna", list.state.with(|s| s.response.total)));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Pengguna" subtitle=total_label>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Tambah"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.refresh()>
                    {icon("refresh")}
                    " Muat ulang"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filter_count()
                    on_reset=Callback::new(move |_| list.clear_filters())
                    pagination_controls=move || view! { <ListPager list=list /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                applied=list.filter_text(SEARCH_KEY)
                                on_search=Callback::new(move |text| list.search(text))
                                placeholder="Username, nama atau email..."
                            />
                            <SelectField
                                label="Role"
                                placeholder="Semua role"
                                value=list.filter_text("role")
                                options=Signal::derive(role_filter_options)
                                on_change=Callback::new(move |code: String| {
                                    list.set_optional_filter("role", (!code.is_empty()).then_some(code))
                                })
                            />
                            <SelectField
                                label="Status"
                                placeholder="Semua status"
                                value=list.filter_text("is_active")
                                options=Signal::derive(status_options)
                                on_change=Callback::new(move |v: String| {
                                    list.set_optional_filter("is_active", v.parse::<bool>().ok())
                                })
                            />
                        </Flex>
                    }
                />

                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader label="Username" field="username" sort=list.sort_signal() on_sort=Callback::new(move |f| list.toggle_sort(f)) min_width=140.0 />
                                <SortableHeader label="Nama Lengkap" field="full_name" sort=list.sort_signal() on_sort=Callback::new(move |f| list.toggle_sort(f)) min_width=160.0 />
                                <TableHeaderCell resizable=false min_width=160.0>"Email"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Role"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <SortableHeader label="Login Terakhir" field="last_login_at" sort=list.sort_signal() on_sort=Callback::new(move |f| list.toggle_sort(f)) min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=150.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|u| (u.id, u.is_active, u.role, u.full_name.clone(), u.email.clone())
                                children=move |user: User| {
                                    let last_login = user
                                        .last_login_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "-".to_string());
                                    let status = if user.is_active {
                                        view! { <span class="badge badge--success">"Aktif"</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--error">"Nonaktif"</span> }.into_any()
                                    };
                                    let toggle_title = if user.is_active { "Nonaktifkan" } else { "Aktifkan" };
                                    let for_edit = user.clone();
                                    let for_password = user.clone();
                                    let for_toggle = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true><strong>{user.username.clone()}</strong></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{user.full_name.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{user.email.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{user.role.label()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{last_login}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button class="btn btn--icon" title="Edit" on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                                        {icon("edit")}
                                                    </button>
                                                    <button class="btn btn--icon" title="Ubah password" on:click=move |_| password_for.set(Some(for_password.clone()))>
                                                        {icon("arrows")}
                                                    </button>
                                                    <button class="btn btn--icon" title=toggle_title on:click=move |_| set_active(for_toggle.clone())>
                                                        {icon("check")}
                                                    </button>
                                                    <button class="btn btn--icon btn--danger" title="Hapus" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|user| view! {
                <UserFormDialog
                    user=user
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            {move || password_for.get().map(|user| view! {
                <ChangePasswordDialog user=user on_close=Callback::new(move |_| password_for.set(None)) />
            })}
            {move || deleting.get().map(|user| view! {
                <ConfirmDialog
                    title="Hapus Pengguna"
                    message=format!("Hapus pengguna \"{}\"? Tindakan ini tidak dapat dibatalkan.", user.username)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
