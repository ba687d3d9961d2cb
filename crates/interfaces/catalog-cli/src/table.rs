use catalog_app_core::ProductListVm;

pub fn render(vm: &ProductListVm) -> String {
    let mut out = String::new();
    if vm.rows.is_empty() {
        out.push_str("No products found.\n");
    } else {
        out.push_str(&format!("{:<34} {:<32} {:>12}\n", "ID", "NAME", "PRICE"));
        out.push_str(&format!("{:-<34} {:-<32} {:->12}\n", "", "", ""));
        for row in &vm.rows {
            out.push_str(&format!(
                "{:<34} {:<32} {:>12}\n",
                row.id, row.name, row.price_label
            ));
        }
    }
    if vm.shown != vm.total {
        out.push_str(&format!("({} of {} shown)\n", vm.shown, vm.total));
    }
    out
}
