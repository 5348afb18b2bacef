//! Template context builders, one per document type.
//!
//! Each builder flattens the stored parent record (and, where the format has
//! line-item tables, the reconstructed fixed grids) into the Typst data
//! dictionary its template consumes. Grid slots with no stored row render
//! with every field blank.

use crate::asistencia::models::{AsistenciaParticipante, ListaAsistencia};
use crate::documento::grid::reconstruir;
use crate::documento::models::*;
use crate::documento::{FILAS_ASISTENCIA, FILAS_CV, FILAS_DIAGNOSTICO, FILAS_PROGRAMA, FILAS_REGISTRO};
use crate::pdf::common::{formato_fecha, lista_typst, TypstDict};
use crate::registro::models::{RegistroFila, RegistroGeneral};

pub fn contexto_inscripcion(d: &Inscripcion) -> String {
    TypstDict::new()
        .fecha("fecha", d.fecha)
        .texto("clave_curso", &d.clave_curso)
        .texto("nombre_curso", &d.nombre_curso)
        .texto("nombre_instructor", &d.nombre_instructor)
        .texto("periodo", &d.periodo)
        .texto("horario", &d.horario)
        .texto("duracion", &d.duracion)
        .texto("genero", &d.genero)
        .texto("nombre_completo", &d.nombre_completo)
        .texto("rfc", &d.rfc)
        .texto("curp", &d.curp)
        .texto("email", &d.email)
        .texto("grado_estudios", &d.grado_estudios)
        .texto("carrera", &d.carrera)
        .texto("instituto", &d.instituto)
        .texto("area_adscripcion", &d.area_adscripcion)
        .texto("puesto", &d.puesto)
        .texto("jefe_inmediato", &d.jefe_inmediato)
        .texto("telefono", &d.telefono)
        .texto("extension", d.extension.as_deref().unwrap_or(""))
        .render()
}

pub fn contexto_ficha(d: &FichaTecnica) -> String {
    TypstDict::new()
        .texto("nombre_curso", &d.nombre_curso)
        .texto("instructor", &d.instructor)
        .texto("introduccion", &d.introduccion)
        .texto("justificacion", &d.justificacion)
        .texto("objetivo_general", &d.objetivo_general)
        .texto("desc_duracion", &d.desc_duracion)
        .texto("desc_contenido", &d.desc_contenido)
        .texto("desc_materiales", &d.desc_materiales)
        .texto("desc_criterios", &d.desc_criterios)
        .texto("resultados", &d.resultados)
        .texto("fuentes_informacion", &d.fuentes_informacion)
        .render()
}

pub fn contexto_criterios(d: &CriteriosSeleccion) -> String {
    TypstDict::new()
        .texto("nombre_instructor", &d.nombre_instructor)
        .fecha("fecha_evaluacion", d.fecha_evaluacion)
        .texto("nombre_curso", &d.nombre_curso)
        .texto("empresa", &d.empresa)
        .numero("criterio_1", Some(d.criterio_1 as i64))
        .numero("criterio_2", Some(d.criterio_2 as i64))
        .numero("criterio_3", Some(d.criterio_3 as i64))
        .numero("criterio_4", Some(d.criterio_4 as i64))
        .numero("criterio_5", Some(d.criterio_5 as i64))
        .numero("total_puntaje", Some(d.total_puntaje as i64))
        .texto("aceptado", &d.aceptado)
        .render()
}

pub fn contexto_encuesta(d: &EncuestaSatisfaccion) -> String {
    let respuestas = lista_typst(
        d.respuestas()
            .iter()
            .map(|r| format!("\"{r}\""))
            .collect(),
    );

    TypstDict::new()
        .texto("nombre_curso", &d.nombre_curso)
        .fecha("fecha", d.fecha)
        .texto("clave", &d.clave)
        .texto("duracion", &d.duracion)
        .texto("institucion", &d.institucion)
        .texto("facilitador", &d.facilitador)
        .texto("periodo", &d.periodo)
        .texto("horario", &d.horario)
        .crudo("respuestas", respuestas)
        .texto("comentarios", d.comentarios.as_deref().unwrap_or(""))
        .render()
}

fn fila_programa(no: usize, d: Option<&ProgramaDetalle>) -> String {
    TypstDict::new()
        .numero("no", Some(no as i64))
        .texto("nombre_curso", d.map(|x| x.nombre_curso.as_str()).unwrap_or(""))
        .texto("objetivo", d.map(|x| x.objetivo.as_str()).unwrap_or(""))
        .texto("periodo", d.map(|x| x.periodo_realizacion.as_str()).unwrap_or(""))
        .texto("lugar", d.map(|x| x.lugar.as_str()).unwrap_or(""))
        .numero("horas", d.and_then(|x| x.horas).map(i64::from))
        .texto("instructor", d.map(|x| x.instructor.as_str()).unwrap_or(""))
        .texto("dirigido", d.map(|x| x.dirigido_a.as_str()).unwrap_or(""))
        .texto(
            "observaciones",
            d.and_then(|x| x.observaciones.as_deref()).unwrap_or(""),
        )
        .render()
}

pub fn contexto_programa(p: &ProgramaInstitucional, detalles: &[ProgramaDetalle]) -> String {
    let grid = reconstruir(detalles, FILAS_PROGRAMA);
    let filas = lista_typst(
        grid.iter()
            .enumerate()
            .map(|(i, d)| fila_programa(i + 1, d.as_ref()))
            .collect(),
    );

    TypstDict::new()
        .texto("periodo", &p.periodo)
        .texto("elaboro_nombre", &p.elaboro_nombre)
        .fecha("elaboro_fecha", p.elaboro_fecha)
        .texto("aprobo_nombre", &p.aprobo_nombre)
        .fecha("aprobo_fecha", p.aprobo_fecha)
        .crudo("filas", filas)
        .render()
}

fn fila_asignatura(no: usize, d: Option<&DiagnosticoAsignatura>) -> String {
    TypstDict::new()
        .numero("no", Some(no as i64))
        .texto("asignatura", d.map(|x| x.asignatura.as_str()).unwrap_or(""))
        .texto("contenido", d.map(|x| x.contenido.as_str()).unwrap_or(""))
        .numero("num_profesores", d.and_then(|x| x.num_profesores).map(i64::from))
        .texto("periodo", d.map(|x| x.periodo.as_str()).unwrap_or(""))
        .texto(
            "instructor_propuesto",
            d.map(|x| x.instructor_propuesto.as_str()).unwrap_or(""),
        )
        .render()
}

fn fila_actividad(no: usize, d: Option<&DiagnosticoActividad>) -> String {
    TypstDict::new()
        .numero("no", Some(no as i64))
        .texto("actividad", d.map(|x| x.actividad.as_str()).unwrap_or(""))
        .texto("carrera_atendida", d.map(|x| x.carrera_atendida.as_str()).unwrap_or(""))
        .texto("fecha_evento", d.map(|x| x.fecha_evento.as_str()).unwrap_or(""))
        .render()
}

fn tabla_asignaturas(filas: &[DiagnosticoAsignatura]) -> String {
    let grid = reconstruir(filas, FILAS_DIAGNOSTICO);
    lista_typst(
        grid.iter()
            .enumerate()
            .map(|(i, d)| fila_asignatura(i + 1, d.as_ref()))
            .collect(),
    )
}

fn tabla_actividades(filas: &[DiagnosticoActividad]) -> String {
    let grid = reconstruir(filas, FILAS_DIAGNOSTICO);
    lista_typst(
        grid.iter()
            .enumerate()
            .map(|(i, d)| fila_actividad(i + 1, d.as_ref()))
            .collect(),
    )
}

pub fn contexto_diagnostico(
    d: &DiagnosticoNecesidades,
    genericas: &[DiagnosticoAsignatura],
    especialidad: &[DiagnosticoAsignatura],
    docentes: &[DiagnosticoActividad],
    profesionales: &[DiagnosticoActividad],
) -> String {
    TypstDict::new()
        .texto("departamento_academico", &d.departamento_academico)
        .texto("carrera", &d.carrera)
        .texto("dept_origen", &d.dept_origen)
        .fecha("fecha_realizacion", d.fecha_realizacion)
        .texto("jefe_nombre", &d.jefe_nombre)
        .texto("presidente_nombre", &d.presidente_nombre)
        .texto("secretario_nombre", &d.secretario_nombre)
        .fecha("fecha_concentrado", d.fecha_concentrado)
        .texto("subdirector_nombre", &d.subdirector_nombre)
        .texto("jefe1_nombre", &d.jefe1_nombre)
        .texto("jefe1_depto", &d.jefe1_depto)
        .texto("jefe2_nombre", &d.jefe2_nombre)
        .texto("jefe2_depto", &d.jefe2_depto)
        .texto("jefe3_nombre", &d.jefe3_nombre)
        .texto("jefe3_depto", &d.jefe3_depto)
        .texto("jefe4_nombre", &d.jefe4_nombre)
        .texto("jefe4_depto", &d.jefe4_depto)
        .crudo("tabla_a", tabla_asignaturas(genericas))
        .crudo("tabla_b", tabla_asignaturas(especialidad))
        .crudo("tabla_c", tabla_actividades(docentes))
        .crudo("tabla_d", tabla_actividades(profesionales))
        .render()
}

pub fn contexto_cv(
    cv: &CurriculumVitae,
    laboral: &[CvExperienciaLaboral],
    docente: &[CvExperienciaDocente],
    productos: &[CvProductoAcademico],
    instructor: &[CvParticipacionInstructor],
) -> String {
    let tabla_laboral = lista_typst(
        reconstruir(laboral, FILAS_CV)
            .iter()
            .map(|d| {
                TypstDict::new()
                    .texto("puesto", d.as_ref().map(|x| x.puesto.as_str()).unwrap_or(""))
                    .texto("empresa", d.as_ref().map(|x| x.empresa.as_str()).unwrap_or(""))
                    .texto(
                        "permanencia",
                        d.as_ref().map(|x| x.permanencia.as_str()).unwrap_or(""),
                    )
                    .texto(
                        "actividades",
                        d.as_ref().map(|x| x.actividades.as_str()).unwrap_or(""),
                    )
                    .render()
            })
            .collect(),
    );

    let tabla_docente = lista_typst(
        reconstruir(docente, FILAS_CV)
            .iter()
            .map(|d| {
                TypstDict::new()
                    .texto("materia", d.as_ref().map(|x| x.materia.as_str()).unwrap_or(""))
                    .texto("periodo", d.as_ref().map(|x| x.periodo.as_str()).unwrap_or(""))
                    .render()
            })
            .collect(),
    );

    let tabla_productos = lista_typst(
        reconstruir(productos, FILAS_CV)
            .iter()
            .map(|d| {
                TypstDict::new()
                    .texto("actividad", d.as_ref().map(|x| x.actividad.as_str()).unwrap_or(""))
                    .texto(
                        "descripcion",
                        d.as_ref().map(|x| x.descripcion.as_str()).unwrap_or(""),
                    )
                    .texto("fecha", d.as_ref().map(|x| x.fecha.as_str()).unwrap_or(""))
                    .render()
            })
            .collect(),
    );

    let tabla_instructor = lista_typst(
        reconstruir(instructor, FILAS_CV)
            .iter()
            .map(|d| {
                TypstDict::new()
                    .texto(
                        "nombre_curso",
                        d.as_ref().map(|x| x.nombre_curso.as_str()).unwrap_or(""),
                    )
                    .texto(
                        "institucion",
                        d.as_ref().map(|x| x.institucion.as_str()).unwrap_or(""),
                    )
                    .texto("duracion", d.as_ref().map(|x| x.duracion.as_str()).unwrap_or(""))
                    .texto("fecha", d.as_ref().map(|x| x.fecha.as_str()).unwrap_or(""))
                    .render()
            })
            .collect(),
    );

    TypstDict::new()
        .texto("nombre", &cv.nombre)
        .fecha("fecha_nacimiento", cv.fecha_nacimiento)
        .texto("curp", &cv.curp)
        .texto("rfc", &cv.rfc)
        .texto("telefono", &cv.telefono)
        .texto("correo", &cv.correo)
        .texto("lic_institucion", &cv.lic_institucion)
        .texto("lic_titulacion", &cv.lic_titulacion)
        .texto("lic_cedula", &cv.lic_cedula)
        .texto("maestria_institucion", &cv.maestria_institucion)
        .texto("maestria_titulacion", &cv.maestria_titulacion)
        .texto("maestria_cedula", &cv.maestria_cedula)
        .texto("doc_institucion", &cv.doc_institucion)
        .texto("doc_titulacion", &cv.doc_titulacion)
        .texto("doc_cedula", &cv.doc_cedula)
        .texto("esp_institucion", &cv.esp_institucion)
        .texto("esp_titulacion", &cv.esp_titulacion)
        .texto("esp_cedula", &cv.esp_cedula)
        .texto("otros_institucion", &cv.otros_institucion)
        .texto("otros_titulacion", &cv.otros_titulacion)
        .texto("otros_cedula", &cv.otros_cedula)
        .crudo("tabla_laboral", tabla_laboral)
        .crudo("tabla_docente", tabla_docente)
        .crudo("tabla_productos", tabla_productos)
        .crudo("tabla_instructor", tabla_instructor)
        .render()
}

fn fila_participante(no: usize, p: Option<&AsistenciaParticipante>) -> String {
    TypstDict::new()
        .numero("no", Some(no as i64))
        .texto("nombre", p.map(|x| x.nombre.as_str()).unwrap_or(""))
        .texto("rfc", p.map(|x| x.rfc.as_str()).unwrap_or(""))
        .texto("puesto", p.map(|x| x.puesto.as_str()).unwrap_or(""))
        .texto("sexo", p.map(|x| x.sexo.as_str()).unwrap_or(""))
        .texto("asist_l", p.map(|x| x.asist_l.as_str()).unwrap_or(""))
        .texto("asist_m1", p.map(|x| x.asist_m1.as_str()).unwrap_or(""))
        .texto("asist_m2", p.map(|x| x.asist_m2.as_str()).unwrap_or(""))
        .texto("asist_j", p.map(|x| x.asist_j.as_str()).unwrap_or(""))
        .texto("asist_v", p.map(|x| x.asist_v.as_str()).unwrap_or(""))
        .texto("concluyo", p.map(|x| x.concluyo.as_str()).unwrap_or(""))
        .render()
}

pub fn contexto_asistencia(
    lista: &ListaAsistencia,
    participantes: &[AsistenciaParticipante],
) -> String {
    let grid = reconstruir(participantes, FILAS_ASISTENCIA);
    let tabla = lista_typst(
        grid.iter()
            .enumerate()
            .map(|(i, p)| fila_participante(i + 1, p.as_ref()))
            .collect(),
    );

    TypstDict::new()
        .texto("hoja_actual", &lista.hoja_actual)
        .texto("hoja_total", &lista.hoja_total)
        .texto("instituto", &lista.instituto)
        .texto("clave_curso", &lista.clave_curso)
        .texto("folio", &lista.folio)
        .texto("nombre_curso", &lista.nombre_curso)
        .texto("instructor", &lista.instructor)
        .texto("periodo", &lista.periodo)
        .texto("duracion", &lista.duracion)
        .texto("horario", &lista.horario)
        .texto("instructor_rfc", &lista.instructor_rfc)
        .texto("instructor_curp", &lista.instructor_curp)
        .texto("coordinador_rfc", &lista.coordinador_rfc)
        .texto("coordinador_curp", &lista.coordinador_curp)
        .crudo("participantes", tabla)
        .render()
}

fn fila_registro(no: usize, r: Option<&RegistroFila>) -> String {
    let marca = |activo: bool| if activo { "X" } else { "" };

    TypstDict::new()
        .numero("no", Some(no as i64))
        .texto("instituto", r.map(|x| x.instituto.as_str()).unwrap_or(""))
        .texto("nombre_curso", r.map(|x| x.nombre_curso.as_str()).unwrap_or(""))
        .texto("es_formacion", r.map(|x| marca(x.es_formacion)).unwrap_or(""))
        .texto(
            "es_actualizacion",
            r.map(|x| marca(x.es_actualizacion)).unwrap_or(""),
        )
        .texto("instructor", r.map(|x| x.instructor.as_str()).unwrap_or(""))
        .texto(
            "fecha_inicio",
            &r.and_then(|x| x.fecha_inicio).map(formato_fecha).unwrap_or_default(),
        )
        .texto(
            "fecha_termino",
            &r.and_then(|x| x.fecha_termino).map(formato_fecha).unwrap_or_default(),
        )
        .numero("horas", r.and_then(|x| x.horas).map(i64::from))
        .texto("modalidad", r.map(|x| x.modalidad.as_str()).unwrap_or(""))
        .numero("inscritos", r.map(|x| x.docentes_inscritos as i64))
        .numero("terminaron", r.map(|x| x.docentes_terminaron as i64))
        .numero("acreditados", r.map(|x| x.docentes_acreditados as i64))
        .texto("tipo", r.map(|x| x.tipo.as_str()).unwrap_or(""))
        .render()
}

pub fn contexto_registro(registro: &RegistroGeneral, filas: &[RegistroFila]) -> String {
    let grid = reconstruir(filas, FILAS_REGISTRO);
    let tabla = lista_typst(
        grid.iter()
            .enumerate()
            .map(|(i, r)| fila_registro(i + 1, r.as_ref()))
            .collect(),
    );

    TypstDict::new()
        .texto("periodo", &registro.periodo)
        .texto("jefe_desarrollo", &registro.jefe_desarrollo)
        .texto("subdirector", &registro.subdirector)
        .crudo("filas", tabla)
        .render()
}
