//! Rendering logic for the dashboard.
//!
//! Pure query methods that read state without modification.

use super::{DashboardApp, Focus};
use crate::tui::components::{
    FilterPanelComponent, FilterPanelViewContext, RecordTableComponent, RecordTableViewContext,
};

/// Expanded picker rows shown at most.
const MAX_EXPANDED_ENTRIES: usize = 8;

impl DashboardApp {
    fn filter_panel_context(&self) -> FilterPanelViewContext<'_> {
        FilterPanelViewContext {
            pickers: &self.pickers,
            filter_state: &self.filter_state,
            active_picker: self.active_picker,
            focused: self.focus == Focus::Filters,
            max_entries: MAX_EXPANDED_ENTRIES,
        }
    }

    /// Lines taken by the filter panel.
    pub(super) fn filter_panel_height(&self) -> usize {
        FilterPanelComponent::height(&self.filter_panel_context())
    }

    /// Renders the title line with the loading indicator.
    pub(super) fn render_header(&self) -> String {
        let title = "Painel de Emprego";
        let loading_indicator = if self.loading { " [Carregando...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    pub(super) fn render_filter_panel(&self) -> String {
        FilterPanelComponent::view(&self.filter_panel_context())
    }

    pub(super) fn render_table(&self) -> String {
        RecordTableComponent::view(&RecordTableViewContext {
            records: &self.records,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: self.table_height(),
            max_width: usize::from(self.width).saturating_sub(1),
            loading: self.loading,
            focused: self.focus == Focus::Table,
        })
    }

    /// Renders the counts followed by the last status message or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let count = self.filtered_count();
        let total = self.records.len();
        let detail = self.status.as_deref().unwrap_or(if self.width <= 80 {
            "Tab:foco  ?:ajuda  q:sair"
        } else {
            "Tab:foco  Espaço:marcar  a:todos  R:limpar  x:exportar  ?:ajuda  q:sair"
        });
        format!("{count}/{total} registros  {detail}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Atalhos ===

Navegação:
  Tab              Alternar entre filtros e tabela
  h, Esquerda      Filtro anterior
  l, Direita       Próximo filtro
  k, Cima          Subir
  j, Baixo         Descer

Filtros:
  Espaço, Enter    Marcar ou desmarcar a opção destacada
  a                Marcar ou desmarcar todas as opções
  d, Backspace     Remover a opção destacada
  R                Limpar todos os filtros

Outros:
  x                Exportar dados filtrados para .xlsx
  ?                Mostrar ou ocultar esta ajuda
  q                Sair

Pressione qualquer tecla para fechar.
";
        help_text.to_owned()
    }
}
